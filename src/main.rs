//! Interactive sign-in form.
//!
//! Plays the rendering layer around the validation core: collects the three
//! fields, validates only on submit, and shows exactly one message per
//! submission.

use anyhow::Result;
use inquire::{Password, PasswordDisplayMode, Text};
use log::info;
use signin_form::SignInForm;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Sign In Form");

    let mut form = SignInForm::new();

    loop {
        let email = Text::new("Email Address:")
            .with_initial_value(&form.input().email)
            .prompt()?;
        form.set_email(&email);

        let password = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;
        form.set_password(&password);

        let confirm_password = Password::new("Confirm Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;
        form.set_confirm_password(&confirm_password);

        let outcome = form.submit();
        info!("submission outcome: {:?}", outcome);

        if outcome.is_valid() {
            println!("{}", outcome.message());
            return Ok(());
        }

        eprintln!("{}", outcome.message());
    }
}
