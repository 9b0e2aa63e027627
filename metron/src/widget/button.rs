use crate::{
    widget::{mnemonic::mnemonic_from_text, PointerButton, SizePolicy, SizePolicyKind},
    Error, Margins, Point, Rect, Result, UnitsConverter,
};
use keyboard_types::Code;
use std::mem;

/// Whether clicking a button toggles its checked state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Checkable {
    NotCheckable,
    /// Checked or unchecked.
    BiState,
    /// Checked, unchecked or indeterminate.
    TriState,
}

/// Things that happened to a button, in the order they happened.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ButtonAction {
    Pressed,
    DoubleClicked,
    Released,
    Clicked,
    RightClicked,
    /// The checked state changed. Followed by one of `Checked`, `Unchecked`, `Indeterminate`.
    Toggled,
    Checked,
    Unchecked,
    Indeterminate,
}

const DEFAULT_SIZE_POLICY: SizePolicy =
    SizePolicy::new(SizePolicyKind::Expanding, SizePolicyKind::Minimum);

/// Push button state.
///
/// The button doesn't draw anything: it tracks its label, checked state and pointer capture, and
/// queues [`ButtonAction`]s for the caller to collect with [`Button::take_actions`].
#[derive(Clone, Debug)]
pub struct Button {
    label: String,
    checkable: Checkable,
    /// `None` is indeterminate.
    checked_state: Option<bool>,
    margins: Option<Margins>,
    size_policy: Option<SizePolicy>,
    capturing: bool,
    actions: Vec<ButtonAction>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Button {
        Button {
            label: label.into(),
            checkable: Checkable::NotCheckable,
            checked_state: Some(false),
            margins: None,
            size_policy: None,
            capturing: false,
            actions: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The label's mnemonic (`"O"` for `"&Open"`), if any.
    pub fn mnemonic(&self) -> Option<String> {
        mnemonic_from_text(&self.label)
    }

    /// Activates the button as if it was clicked, in response to its mnemonic.
    pub fn mnemonic_execute(&mut self) {
        self.handle_clicked();
    }

    pub fn checkable(&self) -> Checkable {
        self.checkable
    }

    pub fn set_checkable(&mut self, checkable: Checkable) {
        self.checkable = checkable;
    }

    pub fn checked_state(&self) -> Option<bool> {
        self.checked_state
    }

    pub fn is_checked(&self) -> bool {
        self.checked_state == Some(true)
    }

    pub fn is_unchecked(&self) -> bool {
        self.checked_state == Some(false)
    }

    pub fn is_indeterminate(&self) -> bool {
        self.checked_state.is_none()
    }

    pub fn check(&mut self) {
        self.apply_checked_state(Some(true));
    }

    pub fn uncheck(&mut self) {
        self.apply_checked_state(Some(false));
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.apply_checked_state(Some(checked));
    }

    /// Fails unless the button is tri-state checkable.
    pub fn set_indeterminate(&mut self) -> Result<()> {
        self.set_checked_state(None).map(|_| ())
    }

    /// Sets the checked state. Returns whether it changed.
    ///
    /// The indeterminate state (`None`) is only allowed for tri-state buttons.
    pub fn set_checked_state(&mut self, state: Option<bool>) -> Result<bool> {
        if self.checked_state == state {
            return Ok(false);
        }
        if state.is_none() && self.checkable != Checkable::TriState {
            return Err(Error::NotTriStateCheckable);
        }
        Ok(self.apply_checked_state(state))
    }

    /// Unchecks a checked or indeterminate button, checks an unchecked one.
    pub fn toggle(&mut self) {
        if self.is_checked() || self.is_indeterminate() {
            self.set_checked(false);
        } else {
            self.set_checked(true);
        }
    }

    fn apply_checked_state(&mut self, state: Option<bool>) -> bool {
        if self.checked_state == state {
            return false;
        }
        self.checked_state = state;
        self.actions.push(ButtonAction::Toggled);
        self.actions.push(match state {
            Some(true) => ButtonAction::Checked,
            Some(false) => ButtonAction::Unchecked,
            None => ButtonAction::Indeterminate,
        });
        true
    }

    /// Whether the button captured the pointer on a press and hasn't seen the release yet.
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn pointer_pressed(&mut self, button: PointerButton, _position: Point) {
        self.capturing = true;
        if button == PointerButton::Left {
            self.actions.push(ButtonAction::Pressed);
        }
    }

    pub fn pointer_double_clicked(&mut self, button: PointerButton, _position: Point) {
        if button == PointerButton::Left {
            self.actions.push(ButtonAction::DoubleClicked);
        }
    }

    /// Handles a pointer release at `position`, `client_rect` being the button's area in the same
    /// coordinate space.
    ///
    /// Releasing the left button inside the button after pressing it is a click.
    pub fn pointer_released(&mut self, button: PointerButton, position: Point, client_rect: Rect) {
        let was_capturing = mem::replace(&mut self.capturing, false);
        if !was_capturing {
            return;
        }
        match button {
            PointerButton::Left => {
                if client_rect.contains(position) {
                    self.handle_clicked();
                }
                self.actions.push(ButtonAction::Released);
            }
            PointerButton::Right => {
                if client_rect.contains(position) {
                    self.actions.push(ButtonAction::RightClicked);
                }
            }
            PointerButton::Middle => {}
        }
    }

    /// Space clicks the button. Returns whether the key was handled.
    pub fn key_pressed(&mut self, code: Code) -> bool {
        if code == Code::Space {
            self.handle_clicked();
            true
        } else {
            false
        }
    }

    fn handle_clicked(&mut self) {
        tracing::trace!(label = %self.label, "button clicked");
        self.actions.push(ButtonAction::Clicked);
        if self.checkable != Checkable::NotCheckable {
            self.toggle();
        }
    }

    /// Drains the queued actions.
    pub fn take_actions(&mut self) -> Vec<ButtonAction> {
        mem::take(&mut self.actions)
    }

    pub fn has_margins(&self) -> bool {
        self.margins.is_some()
    }

    pub fn set_margins(&mut self, margins: Option<Margins>) {
        self.margins = margins;
    }

    /// The button's margins: the ones set explicitly, or `default` with wider horizontal sides.
    pub fn margins(&self, default: Margins) -> Margins {
        match self.margins {
            Some(margins) => margins,
            None => {
                let mut margins = default;
                margins.left *= 2.0;
                margins.right *= 2.0;
                margins
            }
        }
    }

    /// [`margins`](Self::margins) expressed in the converter's units, converted to device pixels.
    pub fn device_margins(&self, converter: &UnitsConverter, default: Margins) -> Result<Margins> {
        converter.to_device_units(self.margins(default))
    }

    pub fn size_policy(&self) -> SizePolicy {
        self.size_policy.unwrap_or(DEFAULT_SIZE_POLICY)
    }

    pub fn set_size_policy(&mut self, size_policy: Option<SizePolicy>) {
        self.size_policy = size_policy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{margins, FixedMetrics, Size, Units, UnitsContext};

    fn bounds() -> Rect {
        Rect::new(Point::new(0.0, 0.0), Size::new(80.0, 24.0))
    }

    fn click(button: &mut Button) {
        button.pointer_pressed(PointerButton::Left, Point::new(10.0, 10.0));
        button.pointer_released(PointerButton::Left, Point::new(12.0, 10.0), bounds());
    }

    #[test]
    fn plain_click() {
        let mut button = Button::new("OK");
        click(&mut button);
        assert_eq!(
            button.take_actions(),
            vec![ButtonAction::Pressed, ButtonAction::Clicked, ButtonAction::Released]
        );
        assert!(button.is_unchecked());
        assert!(button.take_actions().is_empty());
    }

    #[test]
    fn release_outside_is_not_a_click() {
        let mut button = Button::new("OK");
        button.pointer_pressed(PointerButton::Left, Point::new(10.0, 10.0));
        button.pointer_released(PointerButton::Left, Point::new(200.0, 10.0), bounds());
        assert_eq!(
            button.take_actions(),
            vec![ButtonAction::Pressed, ButtonAction::Released]
        );
        assert!(!button.is_capturing());
    }

    #[test]
    fn release_without_capture_is_ignored() {
        let mut button = Button::new("OK");
        button.pointer_released(PointerButton::Left, Point::new(10.0, 10.0), bounds());
        assert!(button.take_actions().is_empty());
    }

    #[test]
    fn right_click() {
        let mut button = Button::new("OK");
        button.pointer_pressed(PointerButton::Right, Point::new(10.0, 10.0));
        button.pointer_released(PointerButton::Right, Point::new(10.0, 10.0), bounds());
        assert_eq!(button.take_actions(), vec![ButtonAction::RightClicked]);
    }

    #[test]
    fn checkable_click_toggles() {
        let mut button = Button::new("Bold");
        button.set_checkable(Checkable::BiState);
        click(&mut button);
        assert!(button.is_checked());
        assert_eq!(
            button.take_actions(),
            vec![
                ButtonAction::Pressed,
                ButtonAction::Clicked,
                ButtonAction::Toggled,
                ButtonAction::Checked,
                ButtonAction::Released
            ]
        );
        assert!(button.key_pressed(Code::Space));
        assert!(button.is_unchecked());
        assert!(!button.key_pressed(Code::Enter));
    }

    #[test]
    fn indeterminate_requires_tri_state() {
        let mut button = Button::new("Mixed");
        button.set_checkable(Checkable::BiState);
        assert_eq!(button.set_indeterminate(), Err(Error::NotTriStateCheckable));
        assert!(button.is_unchecked());

        button.set_checkable(Checkable::TriState);
        assert_eq!(button.set_checked_state(None), Ok(true));
        assert_eq!(button.set_checked_state(None), Ok(false));
        assert_eq!(
            button.take_actions(),
            vec![ButtonAction::Toggled, ButtonAction::Indeterminate]
        );

        button.toggle();
        assert!(button.is_unchecked());
        button.toggle();
        assert!(button.is_checked());
    }

    #[test]
    fn setting_same_state_is_silent() {
        let mut button = Button::new("OK");
        button.uncheck();
        assert!(button.take_actions().is_empty());
        button.check();
        button.check();
        assert_eq!(
            button.take_actions(),
            vec![ButtonAction::Toggled, ButtonAction::Checked]
        );
    }

    #[test]
    fn mnemonic_click() {
        let mut button = Button::new("&Apply");
        assert_eq!(button.mnemonic().as_deref(), Some("A"));
        button.mnemonic_execute();
        assert_eq!(button.take_actions(), vec![ButtonAction::Clicked]);
    }

    #[test]
    fn default_margins_are_wider() {
        let button = Button::new("OK");
        let m = button.margins(margins(2.0, 2.0, 2.0, 2.0));
        assert_eq!(m, margins(4.0, 2.0, 4.0, 2.0));
        assert_eq!(button.size_policy(), DEFAULT_SIZE_POLICY);
    }

    #[test]
    fn device_margins_in_millimetres() {
        let metrics = FixedMetrics::with_dpi(254.0, 127.0, 0.2, Size::new(500.0, 500.0));
        let context = UnitsContext::new(&metrics);
        let converter = UnitsConverter::with_units(&context, Units::Millimetres);

        let mut button = Button::new("OK");
        let m = button
            .device_margins(&converter, margins(1.0, 1.0, 1.0, 1.0))
            .unwrap();
        assert!((m.left - 20.0).abs() < 1e-9 && (m.right - 20.0).abs() < 1e-9);
        assert!((m.top - 5.0).abs() < 1e-9 && (m.bottom - 5.0).abs() < 1e-9);

        button.set_margins(Some(margins(0.0, 0.0, 0.0, 0.0)));
        assert!(button.has_margins());
        let m = button
            .device_margins(&converter, margins(1.0, 1.0, 1.0, 1.0))
            .unwrap();
        assert_eq!(m, margins(0.0, 0.0, 0.0, 0.0));
    }
}
