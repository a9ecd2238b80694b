use super::*;

use std::collections::BTreeSet;

#[test]
fn depth_selects_palette_size() {
    for depth in 0..=4 {
        assert_eq!(Palette::for_color_depth(depth).len(), 4);
    }
    for depth in [5, 8, 16, 255] {
        assert_eq!(Palette::for_color_depth(depth).len(), 8);
    }
    assert_eq!(Palette::for_color_bits(0).len(), 4);
    assert_eq!(Palette::for_color_bits(2).len(), 4);
    assert_eq!(Palette::for_color_bits(3).len(), 8);
}

#[test]
fn palettes_have_distinct_entries() {
    for depth in [4, 8] {
        let p = Palette::for_color_depth(depth);
        let distinct: BTreeSet<[u8; 3]> = p.colors().iter().map(|c| c.0).collect();
        assert_eq!(distinct.len(), p.len());
        assert!(!p.is_empty());
    }
}

#[test]
fn index_order_is_stable() {
    let p4 = Palette::for_color_depth(4);
    assert_eq!(p4.color(0), Rgb([0, 255, 255]));
    assert_eq!(p4.color(3), Rgb([0, 255, 0]));

    let p8 = Palette::for_color_depth(8);
    assert_eq!(p8.color(3), Rgb([255, 65, 65]));
    assert_eq!(p8.color(4), Rgb([255, 159, 0]));
}

#[test]
#[should_panic(expected = "out of range")]
fn index_past_palette_panics() {
    Palette::for_color_depth(4).color(4);
}

#[test]
fn nearest_recovers_each_entry() {
    for depth in [4, 8] {
        let p = Palette::for_color_depth(depth);
        for (i, c) in p.colors().iter().enumerate() {
            assert_eq!(p.nearest(*c), i);
        }
    }

    let p4 = Palette::for_color_depth(4);
    assert_eq!(p4.nearest(Rgb([20, 240, 230])), 0);
    assert_eq!(p4.nearest(Rgb([230, 10, 240])), 2);
}
