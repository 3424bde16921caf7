use serde::Serialize;

/// Sentinel label for zones the firmware reports but no physical key uses.
pub const UNUSED_LABEL: &str = "Unused/Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneEntry {
    #[serde(rename = "zone")]
    pub zone_id: u16,
    pub label: &'static str,
}

impl ZoneEntry {
    pub const fn new(zone_id: u16, label: &'static str) -> Self {
        Self { zone_id, label }
    }

    pub fn is_unused(&self) -> bool {
        self.label.contains("Unused")
    }
}

/// Backlight zone to key label table for the German QWERTZ layout.
///
/// Sorted by ascending `zone_id`; lookups binary search it, so new entries
/// must keep that order. Gaps are allowed.
pub static ZONE_TO_KEY: &[ZoneEntry] = &[
    ZoneEntry::new(0, "Left Ctrl"),
    ZoneEntry::new(1, "Unused/Unknown"),
    ZoneEntry::new(2, "Fn"),
    ZoneEntry::new(3, "Left Windows"),
    ZoneEntry::new(4, "Left Alt"),
    ZoneEntry::new(5, "Unused/Unknown"),
    ZoneEntry::new(6, "Unused/Unknown"),
    ZoneEntry::new(7, "Space"),
    ZoneEntry::new(8, "Unused/Unknown"),
    ZoneEntry::new(9, "Unused/Unknown"),
    ZoneEntry::new(10, "Right Alt"),
    ZoneEntry::new(11, "Unused/Unknown"),
    ZoneEntry::new(12, "Right Ctrl"),
    ZoneEntry::new(13, "Left Arrow"),
    ZoneEntry::new(14, "Up Arrow"),
    ZoneEntry::new(15, "Right Arrow"),
    ZoneEntry::new(16, "Numpad 0"),
    ZoneEntry::new(17, "Numpad ,"),
    ZoneEntry::new(18, "Down Arrow"),
    ZoneEntry::new(19, "Unused/Unknown"),
    ZoneEntry::new(20, "Unused/Unknown"),
    ZoneEntry::new(21, "Unused/Unknown"),
    ZoneEntry::new(22, "Left Shift"),
    ZoneEntry::new(23, "<"),
    ZoneEntry::new(24, "y"),
    ZoneEntry::new(25, "x"),
    ZoneEntry::new(26, "c"),
    ZoneEntry::new(27, "v"),
    ZoneEntry::new(28, "b"),
    ZoneEntry::new(29, "n"),
    ZoneEntry::new(30, "m"),
    ZoneEntry::new(31, ","),
    ZoneEntry::new(32, "."),
    ZoneEntry::new(33, "-"),
    ZoneEntry::new(34, "Unused/Unknown"),
    ZoneEntry::new(35, "Right Shift"),
    ZoneEntry::new(36, "Numpad 1"),
    ZoneEntry::new(37, "Numpad 2"),
    ZoneEntry::new(38, "Numpad 3"),
    ZoneEntry::new(39, "Numpad Enter"),
    ZoneEntry::new(40, "Unused/Unknown"),
    ZoneEntry::new(41, "Unused/Unknown"),
    ZoneEntry::new(42, "Caps Lock"),
    ZoneEntry::new(43, "Unused/Unknown"),
    ZoneEntry::new(44, "a"),
    ZoneEntry::new(45, "s"),
    ZoneEntry::new(46, "d"),
    ZoneEntry::new(47, "f"),
    ZoneEntry::new(48, "g"),
    ZoneEntry::new(49, "h"),
    ZoneEntry::new(50, "j"),
    ZoneEntry::new(51, "k"),
    ZoneEntry::new(52, "l"),
    ZoneEntry::new(53, "ö"),
    ZoneEntry::new(54, "ä"),
    ZoneEntry::new(55, "#"),
    ZoneEntry::new(56, "Unused/Unknown"),
    ZoneEntry::new(57, "Numpad 4"),
    ZoneEntry::new(58, "Numpad 5"),
    ZoneEntry::new(59, "Numpad 6"),
    ZoneEntry::new(60, "Unused/Unknown"),
    ZoneEntry::new(61, "Unused/Unknown"),
    ZoneEntry::new(62, "Unused/Unknown"),
    ZoneEntry::new(63, "Tab"),
    ZoneEntry::new(64, "Unused/Unknown"),
    ZoneEntry::new(65, "q"),
    ZoneEntry::new(66, "w"),
    ZoneEntry::new(67, "e"),
    ZoneEntry::new(68, "r"),
    ZoneEntry::new(69, "t"),
    ZoneEntry::new(70, "z"),
    ZoneEntry::new(71, "u"),
    ZoneEntry::new(72, "i"),
    ZoneEntry::new(73, "o"),
    ZoneEntry::new(74, "p"),
    ZoneEntry::new(75, "ü"),
    ZoneEntry::new(76, "+"),
    ZoneEntry::new(77, "Enter"),
    ZoneEntry::new(78, "Numpad 7"),
    ZoneEntry::new(79, "Numpad 8"),
    ZoneEntry::new(80, "Numpad 9"),
    ZoneEntry::new(81, "Numpad +"),
    ZoneEntry::new(82, "Unused/Unknown"),
    ZoneEntry::new(83, "Unused/Unknown"),
    ZoneEntry::new(84, "^"),
    ZoneEntry::new(85, "1"),
    ZoneEntry::new(86, "2"),
    ZoneEntry::new(87, "3"),
    ZoneEntry::new(88, "4"),
    ZoneEntry::new(89, "5"),
    ZoneEntry::new(90, "6"),
    ZoneEntry::new(91, "7"),
    ZoneEntry::new(92, "8"),
    ZoneEntry::new(93, "9"),
    ZoneEntry::new(94, "0"),
    ZoneEntry::new(95, "ß"),
    ZoneEntry::new(96, "'"),
    ZoneEntry::new(97, "Unused/Unknown"),
    ZoneEntry::new(98, "Backspace"),
    ZoneEntry::new(99, "Num Lock"),
    ZoneEntry::new(100, "Numpad /"),
    ZoneEntry::new(101, "Numpad *"),
    ZoneEntry::new(102, "Numpad -"),
    ZoneEntry::new(103, "Unused/Unknown"),
    ZoneEntry::new(104, "Unused/Unknown"),
    ZoneEntry::new(105, "Esc"),
    ZoneEntry::new(106, "F1"),
    ZoneEntry::new(107, "F2"),
    ZoneEntry::new(108, "F3"),
    ZoneEntry::new(109, "F4"),
    ZoneEntry::new(110, "F5"),
    ZoneEntry::new(111, "F6"),
    ZoneEntry::new(112, "F7"),
    ZoneEntry::new(113, "F8"),
    ZoneEntry::new(114, "F9"),
    ZoneEntry::new(115, "F10"),
    ZoneEntry::new(116, "F11"),
    ZoneEntry::new(117, "F12"),
    ZoneEntry::new(118, "Print Screen"),
    ZoneEntry::new(119, "Insert"),
    ZoneEntry::new(120, "Delete"),
    ZoneEntry::new(121, "Home"),
    ZoneEntry::new(122, "End"),
    ZoneEntry::new(123, "Page Up"),
    ZoneEntry::new(124, "Page Down"),
    ZoneEntry::new(125, "Unused/Unknown"),
];

/// Label stored for `zone_id`, or `None` when the table has no such zone.
pub fn find_label(zone_id: i64) -> Option<&'static str> {
    let zone_id = u16::try_from(zone_id).ok()?;
    ZONE_TO_KEY
        .binary_search_by_key(&zone_id, |entry| entry.zone_id)
        .ok()
        .map(|idx| ZONE_TO_KEY[idx].label)
}

pub fn get_key_label(zone_id: i64) -> String {
    match find_label(zone_id) {
        Some(label) => label.to_string(),
        None => format!("Zone {}", zone_id),
    }
}

pub fn unused_count() -> usize {
    ZONE_TO_KEY.iter().filter(|entry| entry.is_unused()).count()
}
