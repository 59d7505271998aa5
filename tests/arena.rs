//! Paged arena behavior through the public API.

use bytecursor::{Error, PagedArena, Reader};

#[test]
fn growth_keeps_earlier_pages() {
    let mut arena = PagedArena::new(64).unwrap();
    arena.alloc(40).unwrap();
    arena.alloc(20).unwrap();

    let big = arena.alloc(100).unwrap();
    assert_eq!(big.page(), 1);

    let sizes: Vec<(usize, usize)> = arena.pages().map(|p| (p.len(), p.capacity())).collect();
    assert_eq!(sizes, vec![(60, 64), (100, 128)]);

    let small = arena.alloc(4).unwrap();
    assert_eq!((small.page(), small.offset()), (0, 60));
}

#[test]
fn clear_reuses_first_page() {
    let mut arena = PagedArena::new(32).unwrap();
    let first = arena.alloc(16).unwrap();
    arena.alloc(64).unwrap();

    arena.clear();
    assert!(matches!(arena.get(first), Err(Error::InvalidHandle)));
    assert!(matches!(arena.writer(first), Err(Error::InvalidHandle)));

    let again = arena.alloc(16).unwrap();
    assert_eq!((again.page(), again.offset()), (0, 0));
    assert_eq!(arena.page_count(), 2);
}

#[test]
fn serialize_into_spans() {
    let mut arena = PagedArena::default();
    let header = arena.alloc(6).unwrap();
    let body = arena.alloc(16).unwrap();

    {
        let mut writer = arena.writer(header).unwrap();
        writer.write_u32_be(0x4243_5552).unwrap();
        writer.write_u16_le(16).unwrap();
    }
    {
        let mut writer = arena.writer(body).unwrap();
        writer.write_f64_le(1.5).unwrap();
        writer.write_nu64_be(0.25).unwrap();
    }

    let mut reader = arena.reader(header).unwrap();
    assert_eq!(reader.read_u32_be().unwrap(), 0x4243_5552);
    let length = reader.read_u16_le().unwrap();
    assert_eq!(usize::from(length), body.len());

    let mut reader = Reader::from_buffer(arena.get(body).unwrap()).unwrap();
    assert_eq!(reader.read_f64_le().unwrap(), 1.5);
    assert!((reader.read_nu64_be().unwrap() - 0.25).abs() < 1e-15);
}

#[test]
fn free_consumes_the_arena() {
    let mut arena = PagedArena::new(8).unwrap();
    arena.alloc(8).unwrap();
    arena.alloc(8).unwrap();
    arena.free();
}
