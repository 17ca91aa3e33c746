//! GUI controller implementation
//!
//! Owns the slint `MainWindow` and runs one converter tick per field edit.
//! Enter or focus loss rewrites the edited field in the display format.
//!
//! The window and its callbacks share the converter session through
//! `Rc<RefCell<_>>`: slint runs every callback on the event loop thread, so the
//! session is never touched from anywhere else.

use crate::MainWindow;
use hlr_units::config::AppConfig;
use hlr_units::controller::{ConverterController, FieldBindings, format_value};
use hlr_units::error::{HlrUnitsError, Result};
use hlr_units::units::{ConversionState, Field, UiPort};
use slint::{ComponentHandle, SharedString, Weak};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// `UiPort` over the two line edits of the main window
struct WindowPort {
    window: Weak<MainWindow>,
    bindings: FieldBindings,
    decimal_places: usize,
}

impl WindowPort {
    fn set_field_text(&self, window: &MainWindow, field: Field, value: f32) {
        let text = SharedString::from(format_value(value, self.decimal_places));
        match field {
            Field::Blender => window.set_blender_text(text),
            Field::Source => window.set_source_text(text),
        }
    }
}

impl UiPort for WindowPort {
    fn read_inputs(&mut self) -> (f32, f32) {
        self.bindings.inputs()
    }

    fn present(&mut self, state: ConversionState) {
        self.bindings.settle(state);

        let Some(window) = self.window.upgrade() else {
            warn!("Main window is gone; dropping presented state");
            return;
        };

        for field in [Field::Blender, Field::Source] {
            if self.bindings.should_render(field) {
                self.set_field_text(&window, field, state.get(field));
            }
        }
    }
}

/// Converter state plus the port it is presented through
struct Session {
    controller: ConverterController,
    port: WindowPort,
}

impl Session {
    /// Text changed in `field`: bind it and run a tick
    fn on_edited(&mut self, field: Field, text: &str) {
        self.port.bindings.edit_text(field, text);
        self.controller.handle_tick(&mut self.port);
    }

    /// Enter pressed in `field`: stop treating it as being typed into and
    /// normalize its text to the display format
    fn on_accepted(&mut self, field: Field) {
        if self.port.bindings.finish_editing() != Some(field) {
            debug!("{} accepted without a pending edit", field);
        }
        self.present_current();
    }

    /// Focus moved away from `field`: normalize it if it was being typed into
    fn on_focus_lost(&mut self, field: Field) {
        if self.port.bindings.leave(field) {
            debug!("{} lost focus, normalizing its text", field);
            self.present_current();
        }
    }

    fn present_current(&mut self) {
        let state = self.controller.state();
        self.port.present(state);
    }
}

/// Slint window controller
pub struct GuiController {
    window: MainWindow,
    session: Rc<RefCell<Session>>,
}

impl GuiController {
    /// Create the main window and connect its callbacks
    pub fn new(config: &AppConfig) -> Result<Self> {
        info!("Creating converter window");

        let window = MainWindow::new().map_err(|e| HlrUnitsError::WindowCreation(Box::new(e)))?;
        window.set_window_width(config.window.width);
        window.set_window_height(config.window.height);

        let session = Rc::new(RefCell::new(Session {
            controller: ConverterController::new(config),
            port: WindowPort {
                window: window.as_weak(),
                bindings: FieldBindings::default(),
                decimal_places: config.display.decimal_places,
            },
        }));
        session.borrow_mut().present_current();

        Self::connect_field(&window, &session, Field::Blender);
        Self::connect_field(&window, &session, Field::Source);

        let weak_window = window.as_weak();
        window.on_close_requested(move || {
            info!("Escape pressed, closing window");
            if let Some(window) = weak_window.upgrade() {
                if let Err(e) = window.hide() {
                    warn!("Failed to hide window: {}", e);
                }
            }
        });

        Ok(Self { window, session })
    }

    fn connect_field(window: &MainWindow, session: &Rc<RefCell<Session>>, field: Field) {
        let edited = Rc::clone(session);
        let on_edited = move |text: SharedString| edited.borrow_mut().on_edited(field, &text);

        let accepted = Rc::clone(session);
        let on_accepted = move |_text: SharedString| accepted.borrow_mut().on_accepted(field);

        let focus_lost = Rc::clone(session);
        let on_focus_lost = move || focus_lost.borrow_mut().on_focus_lost(field);

        match field {
            Field::Blender => {
                window.on_blender_edited(on_edited);
                window.on_blender_accepted(on_accepted);
                window.on_blender_focus_lost(on_focus_lost);
            }
            Field::Source => {
                window.on_source_edited(on_edited);
                window.on_source_accepted(on_accepted);
                window.on_source_focus_lost(on_focus_lost);
            }
        }
    }

    /// Show the window and run the event loop until the window is closed
    pub fn run(self) -> Result<()> {
        self.window
            .show()
            .map_err(|e| HlrUnitsError::WindowCreation(Box::new(e)))?;
        info!(
            "Window shown at scale factor {}",
            self.window.window().scale_factor()
        );

        slint::run_event_loop().map_err(|e| HlrUnitsError::EventLoop(Box::new(e)))?;

        let session = self.session.borrow();
        info!(
            "Window closed after {} ticks, final state: blender={}, source={}",
            session.controller.tick_count(),
            session.controller.state().blender,
            session.controller.state().source
        );

        Ok(())
    }
}
