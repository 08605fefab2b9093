use pagedvec::{PagedVec, PAGE_SIZE};

#[test]
fn test_new_vector_is_empty() {
    let paged = PagedVec::<i32>::new();

    assert_eq!(paged.len(), 0);
    assert!(paged.is_empty());
    assert_eq!(paged.capacity(), 0);
    assert_eq!(paged.page_count(), 0);
}

#[test]
fn test_end_to_end_scenario() {
    let mut paged = PagedVec::new();

    paged.push(1);
    paged.push(2);
    paged.push(3);
    assert_eq!(paged.len(), 3);
    assert_eq!([paged[0], paged[1], paged[2]], [1, 2, 3]);

    assert_eq!(paged.pop(), Some(3));
    assert_eq!(paged.len(), 2);

    paged.resize_default(70);
    assert_eq!(paged.len(), 70);
    assert_eq!(paged.capacity(), 128);
    assert_eq!(paged[0], 1);
    assert_eq!(paged[1], 2);
    for index in 2..70 {
        assert_eq!(paged[index], 0);
    }
}

#[test]
fn test_push_allocates_one_page_at_a_time() {
    let mut paged = PagedVec::new();

    paged.push(0u64);
    assert_eq!(paged.capacity(), PAGE_SIZE);

    for i in 1..PAGE_SIZE as u64 {
        paged.push(i);
    }
    assert_eq!(paged.page_count(), 1);

    paged.push(64);
    assert_eq!(paged.page_count(), 2);
    assert_eq!(paged.capacity(), 2 * PAGE_SIZE);
    assert_eq!(paged[64], 64);
}

#[test]
fn test_resize_sets_size_and_capacity() {
    let mut paged = PagedVec::<u8>::new();

    for n in [0, 1, 63, 64, 65, 127, 128, 129, 1000, 5, 0] {
        paged.resize_default(n);
        assert_eq!(paged.len(), n);
        assert!(paged.capacity() >= n);
        assert_eq!(paged.capacity() % PAGE_SIZE, 0);
    }
}

#[test]
fn test_resize_with_value_fills_new_slots() {
    let mut paged = PagedVec::new();
    paged.push(String::from("keep"));

    paged.resize(4, String::from("fill"));

    assert_eq!(paged[0], "keep");
    assert_eq!(paged[1], "fill");
    assert_eq!(paged[3], "fill");
    assert_eq!(paged.len(), 4);
}

#[test]
fn test_resize_with_closure() {
    let mut paged = PagedVec::new();
    let mut next = 0;

    paged.resize_with(100, || {
        next += 1;
        next
    });

    assert_eq!(paged[0], 1);
    assert_eq!(paged[99], 100);
}

#[test]
fn test_shrink_drops_trailing_pages() {
    let mut paged = PagedVec::new();
    paged.resize(300, 1u32);
    assert_eq!(paged.page_count(), 5);

    paged.resize_default(65);
    assert_eq!(paged.len(), 65);
    assert_eq!(paged.page_count(), 2);

    paged.resize_default(0);
    assert_eq!(paged.page_count(), 0);
    assert!(paged.is_empty());
}

#[test]
fn test_shrink_then_grow_reinitializes() {
    let mut paged = PagedVec::new();
    paged.resize(100, 5u32);

    paged.resize(10, 5);
    paged.resize(100, 9);

    for index in 0..10 {
        assert_eq!(paged[index], 5);
    }
    for index in 10..100 {
        assert_eq!(paged[index], 9);
    }
}

#[test]
fn test_growing_resize_keeps_extra_pages() {
    let mut paged = PagedVec::<u8>::new();
    paged.reserve(500);
    let pages = paged.page_count();

    paged.resize_default(10);

    assert_eq!(paged.page_count(), pages);
}

#[test]
fn test_reserve_only_grows() {
    let mut paged = PagedVec::<u16>::new();

    paged.reserve(130);
    assert_eq!(paged.capacity(), 192);
    assert_eq!(paged.len(), 0);

    paged.reserve(10);
    assert_eq!(paged.capacity(), 192);
}

#[test]
fn test_reserve_below_length_is_noop() {
    let mut paged = PagedVec::new();
    paged.resize(70, 1u8);
    let capacity = paged.capacity();

    paged.reserve(70);
    paged.reserve(3);

    assert_eq!(paged.capacity(), capacity);
    assert_eq!(paged.len(), 70);
}

#[test]
fn test_index_below_capacity_reaches_default_slot() {
    let mut paged = PagedVec::new();
    paged.push(7i64);

    assert_eq!(paged[PAGE_SIZE - 1], 0);
    paged[10] = 3;
    assert_eq!(paged[10], 3);
    assert_eq!(paged.len(), 1);
}

#[test]
#[should_panic]
fn test_index_past_capacity_panics() {
    let mut paged = PagedVec::new();
    paged.push(1u8);
    let _value = paged[PAGE_SIZE];
}

#[test]
fn test_checked_access() {
    let mut paged = PagedVec::new();
    paged.push(10);
    paged.push(20);

    assert_eq!(paged.get(1), Some(&20));
    assert_eq!(paged.get(2), None);

    *paged.get_mut(0).unwrap() = 11;
    assert_eq!(paged[0], 11);
    assert!(paged.get_mut(5).is_none());
}

#[test]
fn test_back_and_back_mut() {
    let mut paged = PagedVec::new();
    assert_eq!(paged.back(), None);
    assert!(paged.back_mut().is_none());

    paged.push(1);
    paged.push(2);
    assert_eq!(paged.back(), Some(&2));

    *paged.back_mut().unwrap() = 5;
    assert_eq!(paged[1], 5);
}

#[test]
fn test_pop_empty_vector() {
    let mut paged = PagedVec::<u32>::new();
    assert_eq!(paged.pop(), None);
    assert_eq!(paged.len(), 0);
}

#[test]
fn test_pop_releases_empty_page() {
    let mut paged: PagedVec<usize> = (0..65).collect();
    assert_eq!(paged.page_count(), 2);

    assert_eq!(paged.pop(), Some(64));
    assert_eq!(paged.page_count(), 1);
    assert_eq!(paged.back(), Some(&63));
}

#[test]
fn test_truncate() {
    let mut paged: PagedVec<u32> = (0..200).collect();

    paged.truncate(300);
    assert_eq!(paged.len(), 200);

    paged.truncate(64);
    assert_eq!(paged.len(), 64);
    assert_eq!(paged.page_count(), 1);
    assert_eq!(paged[63], 63);
}

#[test]
fn test_clear_operation() {
    let mut paged = PagedVec::new();
    paged.resize(150, 3u8);

    paged.clear();

    assert_eq!(paged.len(), 0);
    assert!(paged.is_empty());
    assert_eq!(paged.capacity(), 0);

    paged.push(4);
    assert_eq!(paged[0], 4);
    assert_eq!(paged.capacity(), PAGE_SIZE);
}

#[test]
fn test_clone_is_independent() {
    let mut original: PagedVec<String> = (0..100).map(|i| i.to_string()).collect();
    let mut copy = original.clone();

    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), 128);

    copy[5] = String::from("changed");
    original[6] = String::from("also changed");

    assert_eq!(original[5], "5");
    assert_eq!(copy[6], "6");
}

#[test]
fn test_clone_is_sized_to_length() {
    let mut original = PagedVec::<u8>::new();
    original.reserve(1000);
    original.push(1);

    let copy = original.clone();

    assert_eq!(copy.len(), 1);
    assert_eq!(copy.page_count(), 1);
}

#[test]
fn test_clone_from_shrinks_target() {
    let source: PagedVec<u32> = (0..10).collect();
    let mut target: PagedVec<u32> = (100..400).collect();

    target.clone_from(&source);

    assert_eq!(target, source);
    assert_eq!(target.page_count(), 1);
}

#[test]
fn test_move_leaves_empty_source() {
    let mut source: PagedVec<u32> = (0..70).collect();
    let first: *const u32 = &source[0];

    let moved = std::mem::take(&mut source);

    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
    assert_eq!(moved.len(), 70);
    assert_eq!(&moved[0] as *const u32, first);
    assert!(moved.iter().copied().eq(0..70));

    source.push(1);
    assert_eq!(source.len(), 1);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a: PagedVec<u8> = (0..10).collect();
    let b: PagedVec<u8> = (0..10).collect();
    a.reserve(500);

    assert_eq!(a, b);

    a[3] = 99;
    assert_ne!(a, b);
}

#[test]
fn test_debug_lists_logical_elements() {
    let paged: PagedVec<u8> = (1..4).collect();
    assert_eq!(format!("{paged:?}"), "[1, 2, 3]");
}

#[test]
fn test_extend_appends() {
    let mut paged = PagedVec::new();
    paged.push(0);
    paged.extend(1..130);

    assert_eq!(paged.len(), 130);
    assert_eq!(paged[129], 129);
    assert_eq!(paged.capacity(), 192);
}

#[test]
fn test_zero_sized_elements() {
    let mut paged = PagedVec::new();
    for _ in 0..100 {
        paged.push(());
    }
    assert_eq!(paged.len(), 100);
    assert_eq!(paged.capacity(), 128);
    assert_eq!(paged.pop(), Some(()));
}
