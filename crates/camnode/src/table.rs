use camnode_core::NamedDevice;

pub struct TableFormatter {
    id_width: usize,
    path_width: usize,
    name_width: usize,
}

impl TableFormatter {
    pub fn new(devices: &[NamedDevice]) -> Self {
        Self {
            id_width: column_width(devices, |d| d.id.chars().count(), 5, 20),
            path_width: column_width(
                devices,
                |d| d.path.display().to_string().chars().count(),
                6,
                40,
            ),
            // Kernel names are at most 31 bytes; "(unreadable)" is 12
            name_width: column_width(
                devices,
                |d| d.name.as_deref().map_or(12, |n| n.chars().count()),
                4,
                40,
            ),
        }
    }

    pub fn print_table(&self, devices: &[NamedDevice]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.row("Entry", "Device", "Name"));
        println!("{}", self.border('├', '┼', '┤'));
        for device in devices {
            println!(
                "{}",
                self.row(
                    &device.id,
                    &device.path.display().to_string(),
                    device.name.as_deref().unwrap_or("(unreadable)"),
                )
            );
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn row(&self, id: &str, path: &str, name: &str) -> String {
        format!(
            "│ {} │ {} │ {} │",
            truncate(id, self.id_width),
            truncate(path, self.path_width),
            truncate(name, self.name_width),
        )
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        format!(
            "{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.path_width + 2),
            "─".repeat(self.name_width + 2),
        )
    }
}

/// Widest value of `measure` across `devices`, clamped to `min..=max`.
fn column_width(
    devices: &[NamedDevice],
    measure: impl Fn(&NamedDevice) -> usize,
    min: usize,
    max: usize,
) -> usize {
    devices.iter().map(measure).max().unwrap_or(min).clamp(min, max)
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn device(id: &str, name: Option<&str>) -> NamedDevice {
        NamedDevice {
            id: id.to_string(),
            path: PathBuf::from(format!("/dev/{id}")),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("abc", 6), "abc   ");
    }

    #[test]
    fn test_truncate_long_strings() {
        assert_eq!(truncate("GelSight Mini R0B", 10), "GelSigh...");
        assert_eq!(truncate("GelSight Mini R0B", 10).chars().count(), 10);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("カメラカメラカメラ", 5), "カメ...");
    }

    #[test]
    fn test_widths_follow_content() {
        let devices = vec![
            device("video0", Some("GelSight Mini R0B 2DDZ-43PB: Ge")),
            device("video10", None),
        ];
        let formatter = TableFormatter::new(&devices);
        assert_eq!(formatter.id_width, 7);
        assert_eq!(formatter.path_width, 12);
        assert_eq!(formatter.name_width, 31);
    }

    #[test]
    fn test_row_and_border_have_equal_width() {
        let devices = vec![device("video2", Some("Cam-A"))];
        let formatter = TableFormatter::new(&devices);
        let row = formatter.row("video2", "/dev/video2", "Cam-A");
        let border = formatter.border('┌', '┬', '┐');
        assert_eq!(row.chars().count(), border.chars().count());
    }

    #[test]
    fn test_empty_device_list_uses_minimum_widths() {
        let formatter = TableFormatter::new(&[]);
        assert_eq!(formatter.id_width, 5);
        assert_eq!(formatter.path_width, 6);
        assert_eq!(formatter.name_width, 4);
    }
}
