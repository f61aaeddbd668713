use colored::*;
use mcexport::api::{CmdMessage, MessageLevel};

/// Status lines go to stderr so stdout only ever carries the document.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

pub fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
        MessageLevel::Success => eprintln!("{}", message.content.green()),
        MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
    }
}
