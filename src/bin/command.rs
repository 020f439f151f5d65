//! Behavioural Patterns: Command
//! Example: smart-home remote with assignable buttons and undo
//!
//! Run with: cargo run --bin command

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Receivers
// =============================================================================

pub struct Light {
    is_on: bool,
}

impl Light {
    pub fn new() -> Self {
        Light { is_on: false }
    }

    pub fn on(&mut self) {
        self.is_on = true;
        println!("Turning light on");
    }

    pub fn off(&mut self) {
        self.is_on = false;
        println!("Turning light off");
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

pub struct Ac {
    is_on: bool,
}

impl Ac {
    pub fn new() -> Self {
        Ac { is_on: false }
    }

    pub fn on(&mut self) {
        self.is_on = true;
        println!("Turning AC on");
    }

    pub fn off(&mut self) {
        self.is_on = false;
        println!("Turning AC off");
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

// =============================================================================
// Command trait and concrete commands
// =============================================================================

/// A request turned into an object: the invoker only knows this contract,
/// never the receiver behind it.
pub trait Command {
    fn execute(&self);
    fn undo(&self);
}

// Commands share their receiver, so several buttons can drive one device.
pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        LightOnCommand { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.borrow_mut().on();
    }

    fn undo(&self) {
        self.light.borrow_mut().off();
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        LightOffCommand { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.borrow_mut().off();
    }

    fn undo(&self) {
        self.light.borrow_mut().on();
    }
}

pub struct AcOnCommand {
    ac: Rc<RefCell<Ac>>,
}

impl AcOnCommand {
    pub fn new(ac: Rc<RefCell<Ac>>) -> Self {
        AcOnCommand { ac }
    }
}

impl Command for AcOnCommand {
    fn execute(&self) {
        self.ac.borrow_mut().on();
    }

    fn undo(&self) {
        self.ac.borrow_mut().off();
    }
}

pub struct AcOffCommand {
    ac: Rc<RefCell<Ac>>,
}

impl AcOffCommand {
    pub fn new(ac: Rc<RefCell<Ac>>) -> Self {
        AcOffCommand { ac }
    }
}

impl Command for AcOffCommand {
    fn execute(&self) {
        self.ac.borrow_mut().off();
    }

    fn undo(&self) {
        self.ac.borrow_mut().on();
    }
}

// =============================================================================
// Invoker
// =============================================================================

const SLOT_COUNT: usize = 4;

/// The remote never sees a receiver. It only knows which command sits on
/// which button, and keeps the executed ones for undo.
pub struct RemoteControl {
    buttons: [Option<Rc<dyn Command>>; SLOT_COUNT],
    history: Vec<Rc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        RemoteControl {
            buttons: [None, None, None, None],
            history: Vec::new(),
        }
    }

    pub fn set_command(&mut self, slot: usize, command: Rc<dyn Command>) {
        match self.buttons.get_mut(slot) {
            Some(button) => *button = Some(command),
            None => println!("No slot {} on this remote", slot),
        }
    }

    pub fn press_button(&mut self, slot: usize) {
        match self.buttons.get(slot) {
            Some(Some(command)) => {
                command.execute();
                self.history.push(Rc::clone(command));
            }
            _ => println!("No command assigned to slot {}", slot),
        }
    }

    /// Reverses the most recently executed command (last-in-first-out).
    pub fn press_undo(&mut self) {
        match self.history.pop() {
            Some(command) => command.undo(),
            None => println!("No commands to undo"),
        }
    }
}

// =============================================================================
// Version 1: without the pattern, for contrast
// =============================================================================

mod naive {
    use super::{Ac, Light};

    enum LastAction {
        LightOn,
        LightOff,
        AcOn,
        AcOff,
    }

    /// Tightly coupled to both devices: every new device or action means
    /// another method and another `LastAction` arm on this struct.
    pub struct NaiveRemoteControl {
        light: Light,
        ac: Ac,
        last_action: Option<LastAction>,
    }

    impl NaiveRemoteControl {
        pub fn new(light: Light, ac: Ac) -> Self {
            NaiveRemoteControl {
                light,
                ac,
                last_action: None,
            }
        }

        pub fn press_light_on(&mut self) {
            self.light.on();
            self.last_action = Some(LastAction::LightOn);
        }

        pub fn press_light_off(&mut self) {
            self.light.off();
            self.last_action = Some(LastAction::LightOff);
        }

        pub fn press_ac_on(&mut self) {
            self.ac.on();
            self.last_action = Some(LastAction::AcOn);
        }

        pub fn press_ac_off(&mut self) {
            self.ac.off();
            self.last_action = Some(LastAction::AcOff);
        }

        pub fn undo(&mut self) {
            match self.last_action.take() {
                Some(LastAction::LightOn) => self.light.off(),
                Some(LastAction::LightOff) => self.light.on(),
                Some(LastAction::AcOn) => self.ac.off(),
                Some(LastAction::AcOff) => self.ac.on(),
                None => println!("No action to undo"),
            }
        }
    }
}

fn main() {
    println!("=== Version 1: Naive Remote (tightly coupled) ===\n");

    let mut naive_remote = naive::NaiveRemoteControl::new(Light::new(), Ac::new());
    naive_remote.press_ac_on();
    naive_remote.press_ac_off();
    naive_remote.undo(); // AC back on
    naive_remote.press_light_off();
    naive_remote.undo(); // Light back on

    println!("\n=== Version 2: Command Pattern ===\n");

    let light = Rc::new(RefCell::new(Light::new()));
    let ac = Rc::new(RefCell::new(Ac::new()));

    let mut remote = RemoteControl::new();
    remote.set_command(0, Rc::new(LightOnCommand::new(Rc::clone(&light))));
    remote.set_command(1, Rc::new(LightOffCommand::new(Rc::clone(&light))));
    remote.set_command(2, Rc::new(AcOnCommand::new(Rc::clone(&ac))));
    remote.set_command(3, Rc::new(AcOffCommand::new(Rc::clone(&ac))));

    remote.press_button(0); // Light ON
    remote.press_button(2); // AC ON
    remote.press_button(1); // Light OFF

    remote.press_undo(); // undoes Light OFF => light back on
    remote.press_undo(); // undoes AC ON => AC off

    println!("\n=== Edge Cases ===\n");

    let mut bare_remote = RemoteControl::new();
    bare_remote.press_button(3); // nothing assigned
    bare_remote.press_button(9); // no such slot
    bare_remote.press_undo(); // nothing executed yet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wired_remote() -> (Rc<RefCell<Light>>, Rc<RefCell<Ac>>, RemoteControl) {
        let light = Rc::new(RefCell::new(Light::new()));
        let ac = Rc::new(RefCell::new(Ac::new()));

        let mut remote = RemoteControl::new();
        remote.set_command(0, Rc::new(LightOnCommand::new(Rc::clone(&light))));
        remote.set_command(1, Rc::new(LightOffCommand::new(Rc::clone(&light))));
        remote.set_command(2, Rc::new(AcOnCommand::new(Rc::clone(&ac))));
        remote.set_command(3, Rc::new(AcOffCommand::new(Rc::clone(&ac))));
        (light, ac, remote)
    }

    #[test]
    fn test_commands_drive_receivers() {
        let (light, ac, mut remote) = wired_remote();

        remote.press_button(0);
        remote.press_button(2);
        assert!(light.borrow().is_on());
        assert!(ac.borrow().is_on());

        remote.press_button(1);
        assert!(!light.borrow().is_on());
    }

    #[test]
    fn test_undo_is_last_in_first_out() {
        let (light, ac, mut remote) = wired_remote();

        remote.press_button(0); // light on
        remote.press_button(2); // ac on
        remote.press_button(1); // light off

        // First undo reverses the most recent press (light off).
        remote.press_undo();
        assert!(light.borrow().is_on());
        assert!(ac.borrow().is_on());

        // Second undo reverses the press before it (ac on).
        remote.press_undo();
        assert!(!ac.borrow().is_on());

        // Third undo reverses the first press (light on).
        remote.press_undo();
        assert!(!light.borrow().is_on());
    }

    #[test]
    fn test_empty_history_undo_is_informational() {
        let (light, ac, mut remote) = wired_remote();

        remote.press_undo();
        assert!(!light.borrow().is_on());
        assert!(!ac.borrow().is_on());
    }

    #[test]
    fn test_unassigned_slot_is_not_recorded() {
        let light = Rc::new(RefCell::new(Light::new()));
        let mut remote = RemoteControl::new();
        remote.set_command(0, Rc::new(LightOnCommand::new(Rc::clone(&light))));

        remote.press_button(3); // unassigned, should not reach the history
        remote.press_button(0);
        remote.press_undo(); // undoes light on, not the empty press

        assert!(!light.borrow().is_on());
    }

    #[test]
    fn test_out_of_range_slot_is_informational() {
        let (light, ac, mut remote) = wired_remote();

        // Pressing or assigning past the last slot reports and moves on.
        remote.press_button(9);
        remote.set_command(17, Rc::new(LightOnCommand::new(Rc::clone(&light))));
        remote.press_undo(); // nothing was recorded by the bad press

        assert!(!light.borrow().is_on());
        assert!(!ac.borrow().is_on());
    }

    #[test]
    fn test_naive_remote_undoes_last_action() {
        let mut remote = naive::NaiveRemoteControl::new(Light::new(), Ac::new());
        remote.press_ac_on();
        remote.press_ac_off();
        remote.undo();
        remote.press_light_off();
        remote.undo();
        // The naive remote only remembers one action, so a second undo
        // has nothing left to reverse.
        remote.undo();
    }
}
