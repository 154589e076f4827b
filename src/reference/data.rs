// Written by beer-color-tools from beer_colors.hjson

use lazy_static::lazy_static;
use rgb::RGB8;
use super::ty::*;

lazy_static! {
  pub(crate) static ref BEER_COLORS: Vec<BeerColorEntry> = vec![
    BeerColorEntry::new(1.0, RGB8 { r: 255, g: 230, b: 153 }),
    BeerColorEntry::new(2.0, RGB8 { r: 255, g: 216, b: 120 }),
    BeerColorEntry::new(3.0, RGB8 { r: 255, g: 202, b: 90 }),
    BeerColorEntry::new(4.0, RGB8 { r: 255, g: 191, b: 66 }),
    BeerColorEntry::new(5.0, RGB8 { r: 251, g: 177, b: 35 }),
    BeerColorEntry::new(6.0, RGB8 { r: 248, g: 166, b: 0 }),
    BeerColorEntry::new(7.0, RGB8 { r: 243, g: 156, b: 0 }),
    BeerColorEntry::new(8.0, RGB8 { r: 234, g: 143, b: 0 }),
    BeerColorEntry::new(9.0, RGB8 { r: 229, g: 133, b: 0 }),
    BeerColorEntry::new(10.0, RGB8 { r: 222, g: 124, b: 0 }),
    BeerColorEntry::new(11.0, RGB8 { r: 215, g: 114, b: 0 }),
    BeerColorEntry::new(12.0, RGB8 { r: 207, g: 105, b: 0 }),
    BeerColorEntry::new(13.0, RGB8 { r: 203, g: 98, b: 0 }),
    BeerColorEntry::new(14.0, RGB8 { r: 195, g: 89, b: 0 }),
    BeerColorEntry::new(15.0, RGB8 { r: 187, g: 81, b: 0 }),
    BeerColorEntry::new(16.0, RGB8 { r: 181, g: 76, b: 0 }),
    BeerColorEntry::new(17.0, RGB8 { r: 176, g: 69, b: 0 }),
    BeerColorEntry::new(18.0, RGB8 { r: 166, g: 62, b: 0 }),
    BeerColorEntry::new(19.0, RGB8 { r: 161, g: 55, b: 0 }),
    BeerColorEntry::new(20.0, RGB8 { r: 155, g: 50, b: 0 }),
    BeerColorEntry::new(21.0, RGB8 { r: 149, g: 45, b: 0 }),
    BeerColorEntry::new(22.0, RGB8 { r: 142, g: 41, b: 0 }),
    BeerColorEntry::new(23.0, RGB8 { r: 136, g: 35, b: 0 }),
    BeerColorEntry::new(24.0, RGB8 { r: 130, g: 30, b: 0 }),
    BeerColorEntry::new(25.0, RGB8 { r: 123, g: 26, b: 0 }),
    BeerColorEntry::new(26.0, RGB8 { r: 119, g: 25, b: 0 }),
    BeerColorEntry::new(27.0, RGB8 { r: 112, g: 20, b: 0 }),
    BeerColorEntry::new(28.0, RGB8 { r: 106, g: 14, b: 0 }),
    BeerColorEntry::new(29.0, RGB8 { r: 102, g: 13, b: 0 }),
    BeerColorEntry::new(30.0, RGB8 { r: 94, g: 11, b: 0 }),
    BeerColorEntry::new(31.0, RGB8 { r: 90, g: 10, b: 2 }),
    BeerColorEntry::new(32.0, RGB8 { r: 96, g: 9, b: 3 }),
    BeerColorEntry::new(33.0, RGB8 { r: 82, g: 9, b: 7 }),
    BeerColorEntry::new(34.0, RGB8 { r: 76, g: 5, b: 5 }),
    BeerColorEntry::new(35.0, RGB8 { r: 71, g: 6, b: 6 }),
    BeerColorEntry::new(36.0, RGB8 { r: 68, g: 6, b: 7 }),
    BeerColorEntry::new(37.0, RGB8 { r: 63, g: 7, b: 8 }),
    BeerColorEntry::new(38.0, RGB8 { r: 59, g: 6, b: 7 }),
    BeerColorEntry::new(39.0, RGB8 { r: 58, g: 7, b: 11 }),
    BeerColorEntry::new(40.0, RGB8 { r: 54, g: 8, b: 10 }),
  ];
}

lazy_static! {
  pub(crate) static ref BEER_COLOR_GROUPS: Vec<BeerColorGroup> = vec![
    BeerColorGroup::new(2.0, "Pale Straw"),
    BeerColorGroup::new(3.0, "Straw"),
    BeerColorGroup::new(4.0, "Pale Gold"),
    BeerColorGroup::new(6.0, "Deep Gold"),
    BeerColorGroup::new(9.0, "Pale Amber"),
    BeerColorGroup::new(12.0, "Medium Amber"),
    BeerColorGroup::new(15.0, "Deep Amber"),
    BeerColorGroup::new(18.0, "Amber Brown"),
    BeerColorGroup::new(20.0, "Brown"),
    BeerColorGroup::new(24.0, "Ruby Brown"),
    BeerColorGroup::new(30.0, "Deep Brown"),
    BeerColorGroup::new(40.0, "Black"),
  ];
}
