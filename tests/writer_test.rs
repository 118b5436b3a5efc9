use tagbin::{Reader, Writer};

#[test]
fn test_growth_across_many_writes() {
    let mut writer = Writer::new();
    for i in 0..10_000i32 {
        writer.write_int(i);
    }
    assert_eq!(writer.len(), 40_000);
    assert_eq!(writer.position(), 40_000);

    let bytes = writer.into_bytes();
    let mut reader = Reader::new(&bytes);
    for i in 0..10_000i32 {
        assert_eq!(reader.read_int().unwrap(), i);
    }
}

#[test]
fn test_seek_back_overwrite_preserves_tail() {
    let mut writer = Writer::new();
    writer.write_long(0x1111111111111111);
    writer.write_long(0x2222222222222222);

    // overwrite only the first field; the second must survive untouched
    writer.seek(0);
    writer.write_long(0x3333333333333333);
    assert_eq!(writer.position(), 8);
    assert_eq!(writer.len(), 16);

    let bytes = writer.into_bytes();
    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.read_long().unwrap(), 0x3333333333333333);
    assert_eq!(reader.read_long().unwrap(), 0x2222222222222222);
}

#[test]
fn test_seek_past_end_zero_fills_gap() {
    let mut writer = Writer::new();
    writer.write_byte(0x7f);
    writer.seek(5);
    writer.write_byte(0x7f);

    assert_eq!(writer.len(), 6);
    assert_eq!(writer.as_slice(), &[0x7f, 0, 0, 0, 0, 0x7f][..]);
}

#[test]
fn test_partial_overwrite_keeps_neighbors() {
    let mut writer = Writer::new();
    writer.write_int(-1); // 0xffFFffFF
    writer.seek(1);
    writer.write_short(0);

    assert_eq!(writer.as_slice(), &[0xff, 0, 0, 0xff][..]);
    assert_eq!(writer.position(), 3);
}

#[test]
fn test_length_is_independent_of_cursor() {
    let mut writer = Writer::new();
    writer.write_int(42);
    writer.seek(0);
    assert_eq!(writer.len(), 4);
    assert_eq!(writer.position(), 0);
}

#[test]
fn test_distinct_writers_are_independent() {
    let mut a = Writer::new();
    let mut b = Writer::new();
    a.write_int(1);
    b.write_short(2);

    assert_eq!(a.as_slice(), &[0, 0, 0, 1][..]);
    assert_eq!(b.as_slice(), &[0, 2][..]);
}

#[test]
fn test_reader_seek_and_remaining() {
    let bytes = [0u8, 1, 2, 3];
    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.remaining(), 4);
    reader.read_short().unwrap();
    assert_eq!(reader.remaining(), 2);
    reader.seek(0);
    assert_eq!(reader.remaining(), 4);
    assert_eq!(reader.read_int().unwrap(), 0x00010203);
    assert_eq!(reader.remaining(), 0);
}
