//! Form state and page navigation for the TUI.

use crate::error::ProfileError;
use crate::estimator::{
    EnergyReport, FacilityType, HouseholdProfile, HousingUnit, Identity, MAX_AGE, MIN_AGE,
    estimate,
};
use crate::page::Page;

/// Longest text accepted in a free-text form field.
const MAX_TEXT_LEN: usize = 40;

/// Focusable form rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    City,
    Area,
    Unit,
    Facility,
    AirConditioner,
    Refrigerator,
    WashingMachine,
    Submit,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Age,
        Self::City,
        Self::Area,
        Self::Unit,
        Self::Facility,
        Self::AirConditioner,
        Self::Refrigerator,
        Self::WashingMachine,
        Self::Submit,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field in tab order, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the field takes typed characters.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::Age | Self::City | Self::Area)
    }
}

/// Editable copy of the calculator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub city: String,
    pub area: String,
    pub unit: HousingUnit,
    pub facility: FacilityType,
    pub air_conditioner: bool,
    pub refrigerator: bool,
    pub washing_machine: bool,
}

impl From<&HouseholdProfile> for ProfileForm {
    fn from(p: &HouseholdProfile) -> Self {
        Self {
            name: p.identity.name.clone(),
            age: p.identity.age.to_string(),
            city: p.identity.city.clone(),
            area: p.identity.area.clone(),
            unit: p.housing_unit,
            facility: p.facility_type,
            air_conditioner: p.has_air_conditioner,
            refrigerator: p.has_refrigerator,
            washing_machine: p.has_washing_machine,
        }
    }
}

impl ProfileForm {
    /// Builds the typed profile. An empty or unparsable age falls back to 25,
    /// anything else is clamped into the accepted range.
    pub fn to_profile(&self) -> HouseholdProfile {
        let age = self
            .age
            .parse::<u32>()
            .map_or(Identity::default().age, |a| a.clamp(MIN_AGE, MAX_AGE));
        HouseholdProfile {
            identity: Identity {
                name: self.name.clone(),
                age,
                city: self.city.clone(),
                area: self.area.clone(),
            },
            housing_unit: self.unit,
            facility_type: self.facility,
            has_air_conditioner: self.air_conditioner,
            has_refrigerator: self.refrigerator,
            has_washing_machine: self.washing_machine,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Age => Some(&mut self.age),
            FormField::City => Some(&mut self.city),
            FormField::Area => Some(&mut self.area),
            _ => None,
        }
    }
}

/// Result of the last submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Profile was complete; holds the estimate.
    Report {
        profile: HouseholdProfile,
        report: EnergyReport,
    },
    /// Required fields were blank; the user should fix the form.
    Incomplete(ProfileError),
}

/// TUI application state.
pub struct App {
    /// Page currently shown.
    pub page: Page,
    /// Calculator form contents.
    pub form: ProfileForm,
    /// Focused form row.
    pub focus: FormField,
    /// Outcome of the most recent submit, cleared on edit.
    pub outcome: Option<Outcome>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app with the form pre-filled from `profile`.
    pub fn new(profile: &HouseholdProfile) -> Self {
        Self {
            page: Page::Calculator,
            form: ProfileForm::from(profile),
            focus: FormField::Name,
            outcome: None,
            quit: false,
        }
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.prev();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused text field.
    ///
    /// Age only takes digits, up to three of them.
    pub fn input_char(&mut self, c: char) {
        let focus = self.focus;
        let Some(text) = self.form.text_mut(focus) else {
            return;
        };
        let accepted = if focus == FormField::Age {
            c.is_ascii_digit() && text.len() < 3
        } else {
            !c.is_control() && text.chars().count() < MAX_TEXT_LEN
        };
        if accepted {
            text.push(c);
            self.outcome = None;
        }
    }

    /// Deletes the last character of the focused text field.
    pub fn backspace(&mut self) {
        let focus = self.focus;
        if let Some(text) = self.form.text_mut(focus) {
            if text.pop().is_some() {
                self.outcome = None;
            }
        }
    }

    /// Toggles a checkbox, cycles a selector, or submits, depending on focus.
    pub fn activate(&mut self) {
        match self.focus {
            FormField::AirConditioner => self.form.air_conditioner = !self.form.air_conditioner,
            FormField::Refrigerator => self.form.refrigerator = !self.form.refrigerator,
            FormField::WashingMachine => self.form.washing_machine = !self.form.washing_machine,
            FormField::Unit | FormField::Facility => self.cycle_option(true),
            FormField::Submit => {
                self.submit();
                return;
            }
            _ => return,
        }
        self.outcome = None;
    }

    /// Moves a selector field forward or backward through its options.
    pub fn cycle_option(&mut self, forward: bool) {
        match self.focus {
            FormField::Unit => {
                self.form.unit = cycle(&HousingUnit::ALL, self.form.unit, forward);
            }
            FormField::Facility => {
                self.form.facility = cycle(&FacilityType::ALL, self.form.facility, forward);
            }
            _ => return,
        }
        self.outcome = None;
    }

    /// Checks the form and, when complete, runs the estimate.
    pub fn submit(&mut self) {
        let profile = self.form.to_profile();
        self.outcome = Some(match profile.identity.ensure_complete() {
            Ok(()) => {
                let report = estimate(&profile);
                Outcome::Report { profile, report }
            }
            Err(e) => Outcome::Incomplete(e),
        });
    }

    /// The estimate from the last successful submit, if any.
    pub fn report(&self) -> Option<&EnergyReport> {
        match &self.outcome {
            Some(Outcome::Report { report, .. }) => Some(report),
            _ => None,
        }
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let len = options.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next]
}
