//! Scoped step-badge styles.
//!
//! The badge shown next to each wizard step title needs a small style set.
//! Styles live in a [`BadgeStyles`] registry and are installed only while at
//! least one [`BadgeHandle`] is alive. The wizard session acquires a handle
//! when the view opens; dropping it on close uninstalls the styles again
//! once no other view holds them.

use std::cell::RefCell;
use std::rc::Rc;

use console::Style;

#[derive(Debug, Clone)]
struct BadgeStyle {
    done: Style,
    current: Style,
    pending: Style,
    counter: Style,
}

impl BadgeStyle {
    fn new(colors: bool) -> Self {
        if colors {
            Self {
                done: Style::new().green(),
                current: Style::new().cyan().bold(),
                pending: Style::new().dim(),
                counter: Style::new().dim(),
            }
        } else {
            Self {
                done: Style::new(),
                current: Style::new(),
                pending: Style::new(),
                counter: Style::new(),
            }
        }
    }
}

#[derive(Debug)]
struct Registry {
    colors: bool,
    live: usize,
    style: Option<BadgeStyle>,
}

/// Registry owning the badge styles for the views that use them.
#[derive(Debug, Clone)]
pub struct BadgeStyles {
    registry: Rc<RefCell<Registry>>,
}

impl BadgeStyles {
    /// Create an empty registry. Nothing is installed until a handle is acquired.
    pub fn new(colors: bool) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                colors,
                live: 0,
                style: None,
            })),
        }
    }

    /// Acquire the styles for a view, installing them on first use.
    pub fn acquire(&self) -> BadgeHandle {
        let mut registry = self.registry.borrow_mut();
        if registry.style.is_none() {
            registry.style = Some(BadgeStyle::new(registry.colors));
        }
        registry.live += 1;

        BadgeHandle {
            registry: Rc::clone(&self.registry),
        }
    }

    /// Number of handles currently alive.
    pub fn live_handles(&self) -> usize {
        self.registry.borrow().live
    }

    /// Whether the styles are currently installed.
    pub fn is_installed(&self) -> bool {
        self.registry.borrow().style.is_some()
    }
}

/// A view's hold on the badge styles. Released on drop.
#[derive(Debug)]
pub struct BadgeHandle {
    registry: Rc<RefCell<Registry>>,
}

impl BadgeHandle {
    /// Render the progress badge for `cursor` of `total`, e.g. `[2/4] ●◉○○`.
    pub fn render(&self, cursor: usize, total: usize) -> String {
        let registry = self.registry.borrow();
        let fallback;
        let style = match &registry.style {
            Some(style) => style,
            None => {
                fallback = BadgeStyle::new(false);
                &fallback
            }
        };

        let dots: String = (1..=total)
            .map(|i| {
                if i < cursor {
                    style.done.apply_to("●").to_string()
                } else if i == cursor {
                    style.current.apply_to("◉").to_string()
                } else {
                    style.pending.apply_to("○").to_string()
                }
            })
            .collect();

        format!(
            "{} {}",
            style.counter.apply_to(format!("[{}/{}]", cursor, total)),
            dots
        )
    }
}

impl Drop for BadgeHandle {
    fn drop(&mut self) {
        let mut registry = self.registry.borrow_mut();
        registry.live = registry.live.saturating_sub(1);
        if registry.live == 0 {
            registry.style = None;
        }
    }
}
