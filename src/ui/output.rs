use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::CHAT, text.style(theme().header.clone()));
}

pub fn banner(title: &str, subtitle: &str) {
    println!();
    println!("  {}", title.style(theme().header.clone()));
    println!("  {}", subtitle.style(theme().dim.clone()));
    println!();
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn bullet(text: &str) {
    println!("  {} {}", Icons::BULLET.style(theme().dim.clone()), text.style(theme().example.clone()));
}

/// Print an answer block, styled as an error when `ok` is false
pub fn answer(text: &str, ok: bool) {
    if ok {
        println!("{}", text);
    } else {
        println!("{}", text.style(theme().warn.clone()));
    }
}
