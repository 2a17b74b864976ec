//! Entry preview using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print a rendered entry, styled on a capable terminal and plain otherwise
pub fn preview(markdown: &str) {
    if should_use_colors() {
        entry_skin().print_text(markdown);
    } else {
        println!("{}", markdown.trim_end());
    }
}

/// Skin for daily log entries: yellow title, bold cyan field labels
fn entry_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Yellow);
    skin.headers[0].add_attr(Attribute::Bold);

    // field labels are bold runs
    skin.bold.set_fg(Cyan);
    skin.bold.add_attr(Attribute::Bold);

    // the snippet placeholder is inline code
    skin.inline_code.set_fg(Green);

    skin
}
