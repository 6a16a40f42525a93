use colored::Colorize;
use marina::api::{CmdMessage, MessageLevel};
use marina::error::MarinaError;
use marina::model::{BoatRecord, StorageLocation};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub(crate) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(crate) fn print_error<W: Write>(out: &mut W, err: &MarinaError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(err.to_string())])
}

/// One line per boat:
///
/// ```text
/// Big Brother            20' slip     # 27   Owes $1200.00
/// Pippin                 14' land        B   Owes $0.00
/// Mistral                22' trailer  NFS20    Owes $100.00
/// ```
pub(crate) fn print_inventory<W: Write>(
    out: &mut W,
    boats: &[BoatRecord],
    name_width: usize,
) -> io::Result<()> {
    for boat in boats {
        let owed = format!("${:.2}", boat.amount_owed());
        let owed = if boat.amount_owed() > 0.0 {
            owed.yellow()
        } else {
            owed.green()
        };
        writeln!(
            out,
            "{} {:>4.0}' {:<8} {}Owes {}",
            pad_to_width(boat.name(), name_width),
            boat.length(),
            boat.location().type_name(),
            format_place(boat.location()),
            owed
        )?;
    }
    Ok(())
}

fn format_place(location: &StorageLocation) -> String {
    match location {
        StorageLocation::Slip(n) | StorageLocation::Storage(n) => format!("# {:>2}   ", n),
        StorageLocation::Land(bay) => format!("   {}   ", bay),
        StorageLocation::Trailer(tag) => format!("{} ", pad_to_width(tag, 8)),
        StorageLocation::Unknown => String::new(),
    }
}

/// Left-aligns `s` in `width` terminal columns. Longer text is left whole.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(boats: &[BoatRecord]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_inventory(&mut out, boats, 20).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_formats_each_kind() {
        let boats = vec![
            BoatRecord::new("Big Brother", 20.0, StorageLocation::Slip(27), 1200.0).unwrap(),
            BoatRecord::new("Pippin", 14.0, StorageLocation::Land('B'), 0.0).unwrap(),
            BoatRecord::new("Mistral", 22.0, StorageLocation::Trailer("NFS20".into()), 100.0)
                .unwrap(),
            BoatRecord::new("Moby", 31.4, StorageLocation::Storage(3), 55.25).unwrap(),
            BoatRecord::new("Mystery", 9.0, StorageLocation::Unknown, 0.0).unwrap(),
        ];
        let text = render(&boats);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Big Brother            20' slip     # 27   Owes $1200.00");
        assert_eq!(lines[1], "Pippin                 14' land        B   Owes $0.00");
        assert_eq!(lines[2], "Mistral                22' trailer  NFS20    Owes $100.00");
        assert_eq!(lines[3], "Moby                   31' storage  #  3   Owes $55.25");
        assert_eq!(lines[4], "Mystery                 9' unknown  Owes $0.00");
    }

    #[test]
    fn test_pads_by_display_width() {
        assert_eq!(pad_to_width("Ålesund", 10), "Ålesund   ");
        assert_eq!(pad_to_width("A very long boat name", 5), "A very long boat name");
    }

    #[test]
    fn test_messages_render_plain_without_color() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_messages(
            &mut out,
            &[
                CmdMessage::success("Boat Bob removed."),
                CmdMessage::error("No boat with that name"),
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Boat Bob removed.\nNo boat with that name\n"
        );
    }
}
