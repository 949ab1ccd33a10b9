use crate::validation::ProfileForm;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Newsletter,
    Terms,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Newsletter,
        ProfileField::Terms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FirstName => "Prenume",
            ProfileField::LastName => "Nume",
            ProfileField::Email => "Email",
            ProfileField::Newsletter => "Vreau să primesc newsletter-ul",
            ProfileField::Terms => "Accept termenii și condițiile",
        }
    }

    fn is_toggle(self) -> bool {
        matches!(self, ProfileField::Newsletter | ProfileField::Terms)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
}

#[derive(Debug, Clone)]
pub struct ProfileFormState {
    pub form: ProfileForm,
    pub focused: ProfileField,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            form: ProfileForm::default(),
            focused: ProfileField::FirstName,
        }
    }
}

impl ProfileFormState {
    pub fn text_value(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::FirstName => Some(&self.form.first_name),
            ProfileField::LastName => Some(&self.form.last_name),
            ProfileField::Email => Some(&self.form.email),
            ProfileField::Newsletter | ProfileField::Terms => None,
        }
    }

    pub fn toggle_value(&self, field: ProfileField) -> Option<bool> {
        match field {
            ProfileField::Newsletter => Some(self.form.newsletter),
            ProfileField::Terms => Some(self.form.accepted_terms),
            _ => None,
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            ProfileField::FirstName => Some(&mut self.form.first_name),
            ProfileField::LastName => Some(&mut self.form.last_name),
            ProfileField::Email => Some(&mut self.form.email),
            ProfileField::Newsletter | ProfileField::Terms => None,
        }
    }

    fn toggle_focused(&mut self) {
        match self.focused {
            ProfileField::Newsletter => self.form.newsletter = !self.form.newsletter,
            ProfileField::Terms => self.form.accepted_terms = !self.form.accepted_terms,
            _ => {}
        }
    }
}

pub fn handle_profile_input(state: &mut ProfileFormState, key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focused = state.focused.next();
            FormAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focused = state.focused.prev();
            FormAction::None
        }
        KeyCode::Enter => FormAction::Submit,
        KeyCode::Char(' ') if state.focused.is_toggle() => {
            state.toggle_focused();
            FormAction::None
        }
        KeyCode::Char(c) => {
            if let Some(text) = state.text_mut() {
                text.push(c);
            }
            FormAction::None
        }
        KeyCode::Backspace => {
            if let Some(text) = state.text_mut() {
                text.pop();
            }
            FormAction::None
        }
        _ => FormAction::None,
    }
}
