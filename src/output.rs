//! User-facing console messages.
//! Consistent colored prefixes, enabled only when the stream is a TTY.
//! Primary outputs users may script against (the "Moved a to b" lines and
//! the final summary) go through [`print_user`] with no prefix.

use owo_colors::OwoColorize;

enum Stream {
    Out,
    Err,
}

fn emit(stream: Stream, prefix: &str, colored: String, msg: &str) {
    match stream {
        Stream::Out => {
            if atty::is(atty::Stream::Stdout) {
                println!("{colored} {msg}");
            } else {
                println!("{prefix} {msg}");
            }
        }
        Stream::Err => {
            if atty::is(atty::Stream::Stderr) {
                eprintln!("{colored} {msg}");
            } else {
                eprintln!("{prefix} {msg}");
            }
        }
    }
}

pub fn print_info(msg: &str) {
    emit(Stream::Out, "info:", "info:".cyan().bold().to_string(), msg);
}

pub fn print_warn(msg: &str) {
    emit(Stream::Err, "warn:", "warn:".yellow().bold().to_string(), msg);
}

pub fn print_error(msg: &str) {
    emit(Stream::Err, "error:", "error:".red().bold().to_string(), msg);
}

/// Plain user-facing line (no prefix, never colored).
pub fn print_user(msg: &str) {
    println!("{msg}");
}
