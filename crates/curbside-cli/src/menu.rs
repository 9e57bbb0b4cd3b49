//! Menu loop: choice parsing and dispatch.

use std::io::{self, BufRead, Write};

use curbside_core::Registry;

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Admit,
    Release,
    ListAll,
    Search,
    Stats,
    ExportJson,
    ClearAll,
    Quit,
}

impl Choice {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Admit),
            "2" => Some(Self::Release),
            "3" => Some(Self::ListAll),
            "4" => Some(Self::Search),
            "5" => Some(Self::Stats),
            "6" => Some(Self::ExportJson),
            "7" => Some(Self::ClearAll),
            "8" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the interactive loop until the user quits or input ends.
pub fn run(
    registry: &mut Registry,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        render::menu(out, registry.capacity())?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let Some(choice) = Choice::parse(&line) else {
            writeln!(out, "Invalid choice, enter a number between 1 and 8.")?;
            continue;
        };

        match choice {
            Choice::Admit => {
                let plate = prompt(input, out, "Plate number: ")?;
                let owner = prompt(input, out, "Owner name: ")?;
                match registry.admit(&plate, &owner) {
                    Ok(entry) => {
                        render::admitted(out, &entry)?;
                        render::availability(out, registry.available(), registry.capacity())?;
                    }
                    Err(e) => render::admit_error(out, &e)?,
                }
            }
            Choice::Release => {
                let plate = prompt(input, out, "Plate number to release: ")?;
                match registry.release(&plate) {
                    Ok((entry, released_at)) => {
                        render::released(out, &entry, released_at)?;
                        render::availability(out, registry.available(), registry.capacity())?;
                    }
                    Err(e) => render::release_error(out, &e)?,
                }
            }
            Choice::ListAll => render::roster(out, registry)?,
            Choice::Search => {
                let plate = prompt(input, out, "Plate number to search: ")?;
                match registry.find(&plate) {
                    Some((entry, position)) => render::found(out, entry, position)?,
                    None => writeln!(out, "No vehicle matching {plate:?} is parked here.")?,
                }
            }
            Choice::Stats => render::stats(out, &registry.stats())?,
            Choice::ExportJson => {
                let json = serde_json::to_string_pretty(registry.list_all())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            Choice::ClearAll => {
                // Destructive; the confirmation gate lives here, not in the core.
                let answer = prompt(input, out, "Clear all vehicles? (y/N): ")?;
                if answer.trim().eq_ignore_ascii_case("y") {
                    registry.reset();
                    writeln!(out, "All vehicles cleared.")?;
                } else {
                    writeln!(out, "Cancelled.")?;
                }
            }
            Choice::Quit => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
        }
    }
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// One line of input; `None` on end of stream.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
