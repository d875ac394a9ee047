//! Prints every supported style to the terminal so the rendering can be
//! checked by eye. Variant support (wavy underline, rapid blink) differs
//! between terminal emulators.
//!
//! Run with: `cargo run --example check_terminal`

use sgrml::Sgr;

fn main() {
    println!("Let's test basic SGR sequences.");
    println!();

    // Bold, Dim, Italic
    println!("{}", Sgr::new("<b>Bold.</b>"));
    println!("{}", Sgr::new("<dim>Dim</dim>"));
    println!("{}", Sgr::new("<i>Italic.</i>"));
    println!(
        "{}",
        Sgr::new(
            "<b>Bold. <i>Italic and Bold. <dim>Dim, Italic and Bold.</dim></b> Italic.</i> Normal."
        )
    );

    // Underline
    println!();
    println!("{}", Sgr::new("<u>Solid Underline.</u>"));
    println!("{}", Sgr::new("<u type=double>Double Underline.</u>"));
    println!("{}", Sgr::new("<u type=wavy>Wavy Underline.</u>"));
    println!("{}", Sgr::new("<u type=dotted>Dotted Underline.</u>"));
    println!("{}", Sgr::new("<u type=dashed>Dashed Underline.</u>"));

    // Blink, Inverse
    println!();
    println!("{}", Sgr::new("<blink type=slow>Slow Blink</blink>"));
    println!("{}", Sgr::new("<blink type=rapid>Rapid Blink</blink>"));
    println!(
        "{}",
        Sgr::new("<inverse>Inverse: Swap foreground and background colors</inverse>")
    );

    // Mix
    println!();
    println!(
        "{}",
        Sgr::new(
            "<u type=wavy><b>Wavy Underline and Bold. <i><u type=solid>Solid Underline, Bold \
             and Italic. </i></u>Wavy Underline and Bold. </b>Wavy Underline.</u>"
        )
    );
}
