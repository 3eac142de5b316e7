use colored::Colorize;
use idcard::assets::ImageAsset;
use idcard::card::{Card, DisplayModel, LogoPair};
use idcard::commands::{CmdMessage, MessageLevel};
use idcard::config::{CardConfig, ConfigKey};
use idcard::model::IndexedRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const EC_NO_WIDTH: usize = 12;
const DATE_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[IndexedRecord]) {
    for entry in records {
        let idx_str = format!("{:>3}. ", entry.index);
        let ec_no = pad_to_width(&truncate_to_width(&entry.record.ec_no, EC_NO_WIDTH), EC_NO_WIDTH);

        let fixed = idx_str.width() + EC_NO_WIDTH + DATE_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let name = pad_to_width(&truncate_to_width(&entry.record.name, available), available);

        println!(
            "{}{} {}{:>width$}",
            idx_str.yellow(),
            ec_no,
            name.bold(),
            entry.record.ec_date.dimmed(),
            width = DATE_WIDTH + 1
        );
    }
}

pub(super) fn print_card(model: &DisplayModel) {
    let Some(card) = model.card() else {
        if let DisplayModel::NotFound { marker } = model {
            println!("{}", marker.red());
        }
        return;
    };
    print_header(card);

    let label_width = card
        .sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .map(|r| r.label.width())
        .max()
        .unwrap_or(0);

    for section in &card.sections {
        println!();
        println!("{}", section.kind.title().bold().underline());
        for row in &section.rows {
            let label = pad_to_width(row.label, label_width);
            let value = if row.highlighted {
                row.value.yellow().bold()
            } else {
                row.value.normal()
            };
            println!("  {} : {}", label.dimmed(), value);
        }
    }
    println!();
    print_logos("Section logos", &card.section_logos);
}

fn print_header(card: &Card) {
    println!("{}", "=".repeat(LINE_WIDTH));
    println!("{}", card.name.bold());
    println!("{}", card.ec_no_line);
    println!("{}", card.ec_date_line);
    let photo = match &card.photo {
        ImageAsset::Embedded(source) => describe_image(source),
        ImageAsset::Referenced(locator) => format!("linked {}", describe_image(locator)),
        ImageAsset::Absent => "No Image".to_string(),
    };
    println!("Photo: {}", photo.dimmed());
    print_logos("Header logos", &card.header_logos);
    println!("{}", "=".repeat(LINE_WIDTH));
}

fn print_logos(title: &str, logos: &LogoPair) {
    println!(
        "{}: left {} | right {}",
        title,
        describe_image(&logos.purple).dimmed(),
        describe_image(&logos.green).dimmed()
    );
}

pub(super) fn print_config(config: &CardConfig) {
    for key in ConfigKey::ALL {
        let value = config.get(key);
        let shown = if value.is_empty() {
            "(unset)".dimmed()
        } else {
            value.normal()
        };
        println!("{} = {}", key.name(), shown);
    }
}

/// Short description of an image source; data URIs are reduced to their type.
fn describe_image(source: &str) -> String {
    match source.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split([';', ',']).next().unwrap_or_default();
            format!("embedded {}", mime)
        }
        None => truncate_to_width(source, LINE_WIDTH / 2),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
