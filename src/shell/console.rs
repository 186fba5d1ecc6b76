//! Interactive console front end
//!
//! Reads requests line by line and writes rendered responses. Generic over
//! the reader and writer so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use crate::shell::{Renderer, Response, Shell};

const BANNER: &str = "\
********** WELCOME **********
Please type what you're after:

You can say things like:
  'tell me about Earth'
  'Venus planet details'
  'show all'
  'exit'
";

const PROMPT: &str = "> ";

/// One raw line. Bytes that are not UTF-8 become U+FFFD, so such a line is
/// answered as unrecognized instead of ending the session.
fn read_request<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Run the console loop until `exit` or end of input.
pub fn run_console<R, W>(shell: &Shell<'_>, renderer: &Renderer, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", BANNER)?;

    loop {
        write!(output, "\n{}", PROMPT)?;
        output.flush()?;

        let Some(line) = read_request(&mut input)? else {
            break;
        };

        let mut response = shell.handle(&line);
        if let Response::NeedsSubject(intent) = response {
            writeln!(output, "{}", renderer.render(&response))?;
            output.flush()?;
            let Some(answer) = read_request(&mut input)? else {
                break;
            };
            response = shell.handle_subject(intent, &answer);
        }

        writeln!(output, "{}", renderer.render(&response))?;
        if response.is_exit() {
            break;
        }
    }

    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, Theme};
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let star = Catalog::bundled().unwrap().build_system("Sol");
        let shell = Shell::new(&star);
        let renderer = Renderer::new().with_theme(Theme::Plain);
        let mut out = Vec::new();
        run_console(&shell, &renderer, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner_and_exit() {
        let out = session("exit\nmars\n");
        assert!(out.starts_with("********** WELCOME **********"));
        assert!(out.contains("Goodbye!"));
        // Nothing after exit is processed
        assert!(!out.contains("Name: Mars"));
    }

    #[test]
    fn test_blank_and_unrecognized_keep_session_alive() {
        let out = session("\n  \ngibberish\nmars\n");
        assert_eq!(out.matches("Input cannot be blank").count(), 2);
        assert!(out.contains("Could not understand what you asked for"));
        assert!(out.contains("Name: Mars"));
    }

    #[test]
    fn test_follow_up_prompt() {
        let out = session("what is the mass\nearth\nquit\n");
        assert!(out.contains("Enter the name of a planet:"));
        assert!(out.contains("The mass of planet Earth is: 5.97 x 10^24 kg."));
    }

    #[test]
    fn test_invalid_utf8_line_is_unrecognized() {
        let star = Catalog::bundled().unwrap().build_system("Sol");
        let shell = Shell::new(&star);
        let renderer = Renderer::new().with_theme(Theme::Plain);
        let mut script = vec![0xc3, 0x28, b'\n'];
        script.extend_from_slice(b"mars\n");

        let mut out = Vec::new();
        run_console(&shell, &renderer, Cursor::new(script), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Could not understand what you asked for"));
        assert!(out.contains("Name: Mars"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let out = session("does mars exist");
        assert!(out.contains("Yes! Planet Mars exists."));
    }
}
