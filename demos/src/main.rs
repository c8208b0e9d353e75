// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted listbox session.
//!
//! Drives an `understory_listbox` listbox from a whitespace-separated script and prints
//! every notification together with the resulting accessibility attributes.
//!
//! Run:
//! - `cargo run -p understory_demos -- --script "focus down down type:to wait:600 type:b"`
//! - `cargo run -p understory_demos -- --multi --script "focus click:1 click:3 enter"`
//! - `cargo run -p understory_demos -- --controlled --script "focus end up"`
//!
//! Set `RUST_LOG=understory_listbox=trace` to see the listbox's own records.
//!
//! Script commands: `focus`, `up`, `down`, `enter`, `home`, `end`, `tab`, `click:N`,
//! `key:CODE` (legacy key code), `type:TEXT` (one key per character), `wait:MS` and
//! `drop:N` (stop rendering option `N`).

use std::fmt::Write as _;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use understory_listbox::{
    Listbox, ListboxConfig, ListboxError, ListboxEvent, ListboxKey, ListboxOption, SelectedIndex,
};

#[derive(Parser, Debug)]
#[command(about = "Drive a headless listbox from a script")]
struct Args {
    /// Option values, in rendering order.
    #[arg(long, value_delimiter = ',', default_value = "bmw,ford,tesla,toyota")]
    options: Vec<String>,
    /// Allow several selected options.
    #[arg(long)]
    multi: bool,
    /// Act as a host that owns focus and selection.
    #[arg(long)]
    controlled: bool,
    /// Typeahead clear delay in milliseconds.
    #[arg(long, default_value_t = 500)]
    typeahead_delay: u64,
    /// Milliseconds the clock advances between script commands.
    #[arg(long, default_value_t = 50)]
    step: u64,
    /// Commands to run.
    #[arg(long, default_value = "focus down down type:to wait:600 type:b end")]
    script: String,
}

#[derive(Debug, thiserror::Error)]
enum SessionError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects a number")]
    BadNumber { command: String },
    #[error(transparent)]
    Listbox(#[from] ListboxError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Focus,
    Key(ListboxKey),
    Click(usize),
    Type(String),
    Wait(u64),
    Unmount(usize),
}

impl Command {
    fn parse(token: &str) -> Result<Self, SessionError> {
        let number = |raw: &str| {
            raw.parse::<u64>().map_err(|_| SessionError::BadNumber {
                command: token.to_owned(),
            })
        };
        Ok(match token.split_once(':') {
            None => match token {
                "focus" => Self::Focus,
                "up" => Self::Key(ListboxKey::ArrowUp),
                "down" => Self::Key(ListboxKey::ArrowDown),
                "enter" => Self::Key(ListboxKey::Enter),
                "home" => Self::Key(ListboxKey::Home),
                "end" => Self::Key(ListboxKey::End),
                "tab" => Self::Key(ListboxKey::Tab),
                _ => return Err(SessionError::UnknownCommand(token.to_owned())),
            },
            Some(("click", index)) => {
                let index = usize::try_from(number(index)?).map_err(|_| SessionError::BadNumber {
                    command: token.to_owned(),
                })?;
                Self::Click(index)
            }
            Some(("key", code)) => {
                let code = u32::try_from(number(code)?).map_err(|_| SessionError::BadNumber {
                    command: token.to_owned(),
                })?;
                Self::Key(ListboxKey::from_key_code(code))
            }
            Some(("type", text)) => Self::Type(text.to_owned()),
            Some(("wait", ms)) => Self::Wait(number(ms)?),
            Some(("drop", index)) => {
                let index = usize::try_from(number(index)?).map_err(|_| SessionError::BadNumber {
                    command: token.to_owned(),
                })?;
                Self::Unmount(index)
            }
            Some(_) => return Err(SessionError::UnknownCommand(token.to_owned())),
        })
    }
}

struct Session {
    listbox: Listbox,
    options: Vec<ListboxOption>,
    values: Vec<String>,
    now: u64,
}

impl Session {
    fn new(args: &Args) -> Result<Self, SessionError> {
        let mut config = ListboxConfig::new()
            .multi_select(args.multi)
            .typeahead_delay(args.typeahead_delay);
        if args.controlled {
            config = config.selected_index(if args.multi {
                SelectedIndex::many(std::iter::empty())
            } else {
                SelectedIndex::One(0)
            });
        }
        let mut session = Self {
            listbox: Listbox::new(config),
            options: args.options.iter().map(|_| ListboxOption::new()).collect(),
            values: args.options.clone(),
            now: 0,
        };
        session.render()?;
        Ok(session)
    }

    fn render(&mut self) -> Result<Vec<ListboxEvent>, SessionError> {
        let (options, values) = (&mut self.options, &self.values);
        let (registered, events) =
            self.listbox
                .register_options(|pass| -> Result<(), ListboxError> {
                    for (option, value) in options.iter_mut().zip(values) {
                        option.register(Some(&mut *pass), value)?;
                    }
                    Ok(())
                });
        registered?;
        Ok(events.into_vec())
    }

    fn run(&mut self, command: &Command) -> Result<Vec<ListboxEvent>, SessionError> {
        self.now += 1;
        let events = match command {
            Command::Focus => self.listbox.focus().into_vec(),
            Command::Key(key) => self.listbox.key_down(*key, self.now).events.into_vec(),
            Command::Click(index) => self.listbox.click(*index)?.into_vec(),
            Command::Type(text) => {
                let mut events = Vec::new();
                for ch in text.chars() {
                    self.now += 1;
                    let response = self.listbox.key_down(ListboxKey::Character(ch), self.now);
                    events.extend(response.events);
                }
                events
            }
            Command::Wait(ms) => {
                self.now += ms;
                self.listbox.tick(self.now);
                Vec::new()
            }
            Command::Unmount(index) => {
                if *index < self.options.len() {
                    self.options.remove(*index);
                    self.values.remove(*index);
                }
                self.render()?
            }
        };
        self.apply_as_host(&events)?;
        Ok(events)
    }

    /// A controlled host feeds reported changes straight back in.
    fn apply_as_host(&mut self, events: &[ListboxEvent]) -> Result<(), SessionError> {
        let Some(current) = self.listbox.controlled().cloned() else {
            return Ok(());
        };
        let mut next = current;
        for event in events {
            match event {
                ListboxEvent::Change(option) => next.focused_index = Some(option.index),
                ListboxEvent::Select(option) => {
                    next.selected_index = Some(match next.selected_index.take() {
                        Some(SelectedIndex::Many(mut indices)) => {
                            if let Some(at) = indices.iter().position(|&i| i == option.index) {
                                indices.remove(at);
                            } else {
                                indices.push(option.index);
                            }
                            SelectedIndex::Many(indices)
                        }
                        _ => SelectedIndex::One(option.index),
                    });
                }
                ListboxEvent::SelectMany(_) => {}
            }
        }
        self.listbox.set_controlled(next)?;
        Ok(())
    }

    fn describe(&self) -> String {
        let mut line = String::new();
        for index in 0..self.listbox.registry().len() {
            let Ok(props) = self.listbox.option_props(index) else {
                continue;
            };
            let focused = self.listbox.listbox_props().active_descendant == Some(props.id);
            let _ = write!(
                line,
                "{}{}{}{} ",
                if focused { ">" } else { " " },
                if props.selected { "[" } else { " " },
                self.values[index],
                if props.selected { "]" } else { " " },
            );
        }
        line
    }
}

fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut session = Session::new(&args)?;
    tracing::info!(
        options = args.options.len(),
        multi = args.multi,
        controlled = args.controlled,
        "session started"
    );

    for token in args.script.split_whitespace() {
        let command = Command::parse(token)?;
        session.now += args.step;
        let events = match session.run(&command) {
            Ok(events) => events,
            Err(SessionError::Listbox(err)) => {
                tracing::warn!(%err, token, "command rejected");
                continue;
            }
            Err(err) => return Err(err),
        };
        println!("{token:>12} | {}", session.describe());
        for event in events {
            match event {
                ListboxEvent::Change(option) => {
                    println!("{:>12} | onChange {} ({})", "", option.value, option.id);
                }
                ListboxEvent::Select(option) => {
                    println!("{:>12} | onSelect {}", "", option.value);
                }
                ListboxEvent::SelectMany(values) => {
                    let values: Vec<&str> = values.values().collect();
                    println!("{:>12} | onSelect {{{}}}", "", values.join(", "));
                }
            }
        }
    }
    Ok(())
}
