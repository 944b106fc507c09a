//! Window-scoped pointer-down observation for dismissing the params panel.
//!
//! Opening the panel arms a watch; closing it (or dropping the panel in any
//! state) releases the watch through the [`Guard`]. The main window owns a
//! single permanent dispatch point that forwards every push event here, so
//! the watch itself is the acquired resource, never a leaked handler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fltk::{enums::Event, prelude::*, window::Window};

struct Watch {
    alive: Rc<Cell<bool>>,
    is_inside: Box<dyn Fn() -> bool>,
    on_outside: Box<dyn FnMut()>,
}

thread_local! {
    // At most one watch: the app has a single params panel, and the panel
    // re-arms on every open. FLTK runs on one thread.
    static ACTIVE: RefCell<Option<Watch>> = const { RefCell::new(None) };
}

/// Releases the armed watch when dropped.
pub struct Guard {
    alive: Rc<Cell<bool>>,
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.alive.set(false);
        ACTIVE.with(|a| {
            let mut slot = a.borrow_mut();
            let is_mine = slot
                .as_ref()
                .is_some_and(|w| Rc::ptr_eq(&w.alive, &self.alive));
            if is_mine {
                *slot = None;
            }
        });
    }
}

/// Arm the watch. `is_inside` answers whether the current event lies within
/// the panel surface or its toggle; `on_outside` fires on any other push.
/// A previously armed watch is superseded.
pub fn arm(is_inside: impl Fn() -> bool + 'static, on_outside: impl FnMut() + 'static) -> Guard {
    let alive = Rc::new(Cell::new(true));
    let watch = Watch {
        alive: alive.clone(),
        is_inside: Box::new(is_inside),
        on_outside: Box::new(on_outside),
    };
    ACTIVE.with(|a| {
        if let Some(old) = a.borrow_mut().replace(watch) {
            old.alive.set(false);
        }
    });
    Guard { alive }
}

/// Forward one pointer-down event to the armed watch, if any. The watch is
/// taken out of the slot while its callback runs so the callback may drop
/// its own guard (the usual case: closing the panel).
pub fn notify_push() {
    let mut watch = match ACTIVE.with(|a| a.borrow_mut().take()) {
        Some(w) => w,
        None => return,
    };

    if (watch.is_inside)() {
        restore(watch);
        return;
    }

    (watch.on_outside)();
    if watch.alive.get() {
        restore(watch);
    }
}

fn restore(watch: Watch) {
    ACTIVE.with(|a| {
        let mut slot = a.borrow_mut();
        // The callback may have armed a replacement; keep the newer watch.
        if slot.is_none() {
            *slot = Some(watch);
        }
    });
}

fn armed() -> bool {
    ACTIVE.with(|a| a.borrow().is_some())
}

/// Install the permanent dispatch point on the main window. Every push
/// reaching the window is observed and never consumed, so the click still
/// lands on whatever it was aimed at.
pub fn install(window: &mut Window) {
    window.handle(|_, event| {
        if event == Event::Push {
            notify_push();
        }
        false
    });
}
