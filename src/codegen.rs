use crate::zones::get_key_label;

/// Number of zones the generated visualizer snippet covers.
///
/// This predates the full 126-zone table and only reaches zone 17. Left as is
/// until someone confirms what the visualizer actually expects.
pub const GENERATED_ZONE_COUNT: i64 = 18;

/// Builds `createKeyButton` calls for `KeyboardVisualizerWidget.cpp`.
///
/// `row`, `col` and `currentZone` are placeholders the caller fills in by hand
/// after pasting the snippet.
pub fn generate_keyboard_layout_code() -> String {
    let mut code_lines = Vec::with_capacity(GENERATED_ZONE_COUNT as usize * 2);

    for zone in 0..GENERATED_ZONE_COUNT {
        let key_label = get_key_label(zone);
        code_lines.push("  zoneId = currentZone++;".to_string());
        code_lines.push(format!(
            "  createKeyButton( zoneId, \"{}\", row, col );",
            key_label
        ));
    }

    code_lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let code = generate_keyboard_layout_code();
        assert_eq!(code.lines().count(), 36);
        assert!(!code.ends_with('\n'));
    }

    #[test]
    fn test_first_key() {
        let code = generate_keyboard_layout_code();
        let mut lines = code.lines();

        let first = lines.next().unwrap();
        let second = lines.next().unwrap();
        assert!(first.contains("zoneId = currentZone++;"));
        assert!(second.contains("createKeyButton("));
        assert!(second.contains("\"Left Ctrl\", row, col );"));
        assert_eq!(second, "  createKeyButton( zoneId, \"Left Ctrl\", row, col );");
    }

    #[test]
    fn test_each_zone_embeds_its_label() {
        let code = generate_keyboard_layout_code();
        let lines: Vec<&str> = code.lines().collect();

        for (zone, pair) in lines.chunks(2).enumerate() {
            assert_eq!(pair[0], "  zoneId = currentZone++;");
            let expected = format!("\"{}\"", get_key_label(zone as i64));
            assert!(pair[1].contains(&expected), "zone {}: {}", zone, pair[1]);
        }

        assert!(lines[15].contains("\"Space\""));
        assert!(lines[21].contains("\"Right Alt\""));
    }

    #[test]
    fn test_stops_before_zone_18() {
        let code = generate_keyboard_layout_code();
        assert!(code.contains("\"Numpad ,\""));
        assert!(!code.contains("\"Down Arrow\""));
    }

    #[test]
    fn test_generation_is_stable() {
        assert_eq!(
            generate_keyboard_layout_code(),
            generate_keyboard_layout_code()
        );
    }
}
