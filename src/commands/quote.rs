use crate::libs::messages::Message;
use crate::libs::quote;
use crate::{msg_debug, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Copy the quote to the system clipboard
    #[arg(short, long)]
    copy: bool,
}

pub fn cmd(args: QuoteArgs) -> Result<()> {
    let text = quote::pick();
    msg_print!(text);
    if args.copy {
        match copy_to_clipboard(text) {
            Ok(()) => msg_success!(Message::QuoteCopied),
            Err(err) => {
                msg_warning!(Message::ClipboardUnavailable);
                msg_debug!(format!("clipboard error: {}", err));
            }
        }
    }
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text)
}
