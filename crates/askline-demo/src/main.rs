//! Interactive walkthrough of every askline prompt type.
//!
//! Answer the prompts, leave a line empty to take its default, or dismiss a
//! menu without choosing to fall back to its default.

use anyhow::Result;
use askline::style::{success, warning};
use askline::{
    ChoosePrompt, ConfirmPrompt, DatePrompt, FloatPrompt, IntPrompt, ListPrompt,
    MultiChoosePrompt, SetPrompt, TextPrompt, TuplePrompt,
};
use chrono::{Days, Local};

fn rule() {
    println!("{}\n", "=".repeat(30));
}

fn numbered(values: &[usize]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    let picked = IntPrompt::new("Enter number between 1 and 5")
        .default(3)
        .min(1)
        .max(5)
        .delimiter(" -> ")
        .ask()?;
    println!("You entered {}", success(picked));
    rule();

    let ratio = FloatPrompt::new("Enter decimal between 0 and 1")
        .min(0.0)
        .max(1.0)
        .ask()?;
    println!("You entered {}", success(ratio));
    rule();

    let line = TextPrompt::new("Enter anything, with at least 1 and at most 6 chars")
        .min(1)
        .max(6)
        .ask()?;
    println!("You entered the string {}", success(line));
    rule();

    let numbers = ListPrompt::new("Enter integer list items")
        .default(vec![0i64, 1, 2])
        .ask()?;
    println!(
        "You entered these values to list: {}",
        success(format!("{numbers:?}"))
    );
    rule();

    let floats: Box<[f64]> = TuplePrompt::new("Enter at most 3 float items")
        .separator(" ")
        .max(3)
        .ask()?;
    println!(
        "You entered these values to tuple: {}",
        success(format!("{floats:?}"))
    );
    rule();

    let words = SetPrompt::<String>::new("Enter at least 3 string items")
        .min(3)
        .ask()?;
    println!(
        "You entered these values to set: {}",
        success(format!("{words:?}"))
    );
    rule();

    let today = Local::now().date_naive();
    let scheduled = DatePrompt::new("Enter a date after today")
        .default(today + Days::new(1))
        .after(today)
        .ask()?;
    println!("You entered the date {}", success(scheduled));
    let remembered = DatePrompt::new("Enter a date before today")
        .before(today)
        .format("%d-%m-%Y")
        .ask()?;
    println!("You entered the date {}", success(remembered));
    rule();

    if ConfirmPrompt::new("Are you sure to continue?").ask()? {
        println!("Hmm...");
    } else {
        println!("{}", warning("Let me ask again"));
    }
    if ConfirmPrompt::new("Are you really sure to continue?")
        .default(true)
        .ask()?
    {
        println!("That's what I thought");
    } else {
        println!("{}", warning("Uh... we are going on anyway"));
    }
    if ConfirmPrompt::new("Do you really want to stop?")
        .default(false)
        .ask()?
    {
        println!("I'm kidding, we are continuing ;P");
    } else {
        println!("Wokay! Let's go...");
    }
    rule();

    let index = ChoosePrompt::among("Choose an option", ["Option 1", "Option 2"])
        .default_label("Option 2")
        .ask()?;
    println!("You chose index {}", success(index));
    let described = ChoosePrompt::mapping(
        "Choose another option",
        [("Option 1", "First option"), ("Option 2", "Second option")],
    )
    .default_index(1)
    .ask()?;
    println!("You chose {}", success(described));
    rule();

    let from_list = MultiChoosePrompt::among(
        "Choose at least 2 items from the list",
        ["Option 1", "Option 2", "Option 3", "Option 4"],
    )
    .preselect_labels(["Option 2", "Option 4"])
    .min(2)
    .ask()?;
    println!("You chose {}", success(numbered(&from_list)));

    let from_tuple = MultiChoosePrompt::among(
        "Choose at most 3 items from the tuple",
        ["Option 1", "Option 2", "Option 3", "Option 4"],
    )
    .preselect_indices([0, 2])
    .max(3)
    .ask()?;
    println!("You chose {}", success(numbered(&from_tuple)));

    let from_mapping = MultiChoosePrompt::mapping(
        "Choose multiple items from the mapping",
        [
            ("Option 1", "First option"),
            ("Option 2", "Second option"),
            ("Option 3", "Third option"),
            ("Option 4", "Fourth option"),
        ],
    )
    .preselect_labels(["Option 2", "Option 3"])
    .ask()?;
    println!("You chose {}", success(from_mapping.join(", ")));

    Ok(())
}
