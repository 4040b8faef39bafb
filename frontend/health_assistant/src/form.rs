//! Line-driven rendition of the Login / Sign Up / prediction pages.
//!
//! [`FormSession`] consumes one answer per line and returns the lines to
//! print, so the whole page flow can be driven from a REPL, a script file
//! or a test.

use medi_gate::{SessionContext, SessionGate};
use medi_predict::{Condition, DispatcherSet, FieldSpec};

use crate::about::about_lines;

const QUIT_COMMANDS: [&str; 3] = [":quit", ":q", ":exit"];
const BACK_COMMAND: &str = ":back";
const ACCOUNT_FIELDS: [&str; 3] = ["Full Name", "Email", "Password"];
const PASSWORD_FIELD: usize = 2;
const MENU_TITLE: &str = "Multiple Disease Prediction System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountForm {
    Login,
    SignUp,
}

impl AccountForm {
    pub fn title(self) -> &'static str {
        match self {
            AccountForm::Login => "Login",
            AccountForm::SignUp => "Sign Up",
        }
    }
}

/// Where the user currently is in the page flow
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    ChooseOption,
    Account {
        form: AccountForm,
        answers: Vec<String>,
    },
    Menu,
    Predict {
        condition: Condition,
        answers: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Predict(Condition),
    About,
}

pub struct FormSession {
    gate: SessionGate,
    dispatchers: DispatcherSet,
    session: SessionContext,
    step: Step,
}

impl FormSession {
    pub fn new(gate: SessionGate, dispatchers: DispatcherSet) -> Self {
        Self {
            gate,
            dispatchers,
            session: SessionContext::new(),
            step: Step::ChooseOption,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    /// Lines shown before the first prompt
    pub fn greeting(&self) -> Vec<String> {
        let mut out = vec!["Health Assistant".to_string(), String::new()];
        out.extend(option_lines());
        out
    }

    pub fn prompt(&self) -> String {
        match &self.step {
            Step::ChooseOption => "Select an option (login / sign up): ".to_string(),
            Step::Account { answers, .. } => format!("{}: ", ACCOUNT_FIELDS[answers.len()]),
            Step::Menu => "Select a page: ".to_string(),
            Step::Predict { condition, answers } => match self.field(*condition, answers.len()) {
                Some(field) => format!("{}: ", field.prompt),
                None => "> ".to_string(),
            },
        }
    }

    /// The next answer is a password and should not be echoed
    pub fn masks_input(&self) -> bool {
        matches!(&self.step, Step::Account { answers, .. } if answers.len() == PASSWORD_FIELD)
    }

    /// Feed one input line. Returns the lines to print and whether to exit.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let line = line.trim_end_matches(['\r', '\n']);
        let cmd = line.trim();
        if QUIT_COMMANDS.contains(&cmd) {
            return (vec!["Goodbye.".to_string()], true);
        }

        match std::mem::replace(&mut self.step, Step::ChooseOption) {
            Step::ChooseOption => self.choose_option(cmd),
            Step::Account { form, mut answers } => {
                if cmd == BACK_COMMAND {
                    return (option_lines(), false);
                }
                answers.push(line.to_string());
                if answers.len() < ACCOUNT_FIELDS.len() {
                    self.step = Step::Account { form, answers };
                    return (Vec::new(), false);
                }
                (self.submit_account(form, &answers), false)
            }
            Step::Menu => {
                if !self.session.is_authenticated() {
                    return (self.require_login(), false);
                }
                self.choose_menu(cmd)
            }
            Step::Predict {
                condition,
                mut answers,
            } => {
                if !self.session.is_authenticated() {
                    return (self.require_login(), false);
                }
                if cmd == BACK_COMMAND {
                    self.step = Step::Menu;
                    return (self.menu_lines(), false);
                }
                answers.push(line.to_string());
                let arity = self
                    .dispatchers
                    .get(condition)
                    .map(|d| d.spec().arity())
                    .unwrap_or(0);
                if answers.len() < arity {
                    self.step = Step::Predict { condition, answers };
                    return (Vec::new(), false);
                }
                (self.submit_prediction(condition, &answers), false)
            }
        }
    }

    fn field(&self, condition: Condition, index: usize) -> Option<&FieldSpec> {
        self.dispatchers
            .get(condition)
            .and_then(|d| d.spec().fields.get(index))
    }

    fn require_login(&mut self) -> Vec<String> {
        self.step = Step::ChooseOption;
        let mut out = vec!["Please log in first.".to_string()];
        out.extend(option_lines());
        out
    }

    fn choose_option(&mut self, cmd: &str) -> (Vec<String>, bool) {
        let form = match cmd.to_ascii_lowercase().as_str() {
            "1" | "l" | "login" | "log in" => AccountForm::Login,
            "2" | "s" | "signup" | "sign up" | "sign-up" => AccountForm::SignUp,
            "quit" | "exit" => return (vec!["Goodbye.".to_string()], true),
            "" => return (option_lines(), false),
            other => {
                let mut out = vec![format!("error: unknown option '{other}'")];
                out.extend(option_lines());
                return (out, false);
            }
        };
        self.step = Step::Account {
            form,
            answers: Vec::new(),
        };
        (vec![format!("== {} ==", form.title())], false)
    }

    fn submit_account(&mut self, form: AccountForm, answers: &[String]) -> Vec<String> {
        let (name, email, password) = (&answers[0], &answers[1], &answers[2]);
        match form {
            AccountForm::Login => {
                match self.gate.login(&mut self.session, name, email, password) {
                    Ok(()) => {
                        self.step = Step::Menu;
                        let mut out = vec!["✓ Login successful!".to_string(), String::new()];
                        out.extend(self.menu_lines());
                        out
                    }
                    Err(e) => self.retry_account(form, e.to_string()),
                }
            }
            AccountForm::SignUp => match self.gate.register(name, email, password) {
                Ok(_) => {
                    self.step = Step::ChooseOption;
                    let mut out = vec!["✓ Sign Up successful! You can now log in.".to_string()];
                    out.extend(option_lines());
                    out
                }
                Err(e) => self.retry_account(form, e.to_string()),
            },
        }
    }

    fn retry_account(&mut self, form: AccountForm, message: String) -> Vec<String> {
        self.step = Step::Account {
            form,
            answers: Vec::new(),
        };
        vec![
            format!("error: {message}"),
            format!("== {} == (type {BACK_COMMAND} to choose another option)", form.title()),
        ]
    }

    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.dispatchers
            .conditions()
            .map(MenuEntry::Predict)
            .chain(std::iter::once(MenuEntry::About))
            .collect()
    }

    fn menu_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(name) = self.session.user_name() {
            out.push(format!("Welcome, {name}!"));
        }
        out.push(MENU_TITLE.to_string());
        for (i, entry) in self.menu_entries().iter().enumerate() {
            let title = match entry {
                MenuEntry::Predict(c) => c.title(),
                MenuEntry::About => "About",
            };
            out.push(format!("  {}. {title}", i + 1));
        }
        out
    }

    fn choose_menu(&mut self, cmd: &str) -> (Vec<String>, bool) {
        self.step = Step::Menu;
        let lower = cmd.to_ascii_lowercase();
        if lower == "quit" || lower == "exit" {
            return (vec!["Goodbye.".to_string()], true);
        }
        if lower.is_empty() {
            return (self.menu_lines(), false);
        }

        let entries = self.menu_entries();
        let picked = match lower.parse::<usize>() {
            Ok(n) if n >= 1 => entries.get(n - 1).copied(),
            Ok(_) => None,
            Err(_) => {
                let name = lower.strip_suffix(" prediction").unwrap_or(&lower);
                if name == "about" {
                    Some(MenuEntry::About)
                } else {
                    name.parse::<Condition>()
                        .ok()
                        .map(MenuEntry::Predict)
                        .filter(|e| entries.contains(e))
                }
            }
        };

        match picked {
            Some(MenuEntry::About) => {
                let mut out = about_lines();
                out.push(String::new());
                out.extend(self.menu_lines());
                (out, false)
            }
            Some(MenuEntry::Predict(condition)) => {
                self.step = Step::Predict {
                    condition,
                    answers: Vec::new(),
                };
                (
                    vec![format!(
                        "== {} using ML == (type {BACK_COMMAND} to return)",
                        condition.title()
                    )],
                    false,
                )
            }
            None => {
                let mut out = vec![format!("error: unknown page '{cmd}'")];
                out.extend(self.menu_lines());
                (out, false)
            }
        }
    }

    fn submit_prediction(&mut self, condition: Condition, answers: &[String]) -> Vec<String> {
        self.step = Step::Menu;
        let mut out = match self.dispatchers.get(condition) {
            Some(dispatcher) => match dispatcher.predict(answers) {
                Ok(label) => vec![format!("✓ {label}")],
                Err(e) => vec![format!("error: {e}")],
            },
            None => vec![format!("error: no model loaded for {condition}")],
        };
        out.push(String::new());
        out.extend(self.menu_lines());
        out
    }
}

fn option_lines() -> Vec<String> {
    vec![
        "Select an option:".to_string(),
        "  1. Login".to_string(),
        "  2. Sign Up".to_string(),
    ]
}

/// Drive a session from a script, one answer per line.
///
/// Lines starting with `#` are skipped. Returns the transcript: each prompt
/// with its (masked, for passwords) answer, followed by the session output.
pub fn run_script(session: &mut FormSession, script: &str) -> Vec<String> {
    let mut transcript = session.greeting();
    for line in script.lines() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        let shown = if session.masks_input() {
            "*".repeat(line.chars().count())
        } else {
            line.to_string()
        };
        transcript.push(format!("{}{shown}", session.prompt()));
        let (out, exit) = session.handle_line(line);
        transcript.extend(out);
        if exit {
            break;
        }
    }
    transcript
}
