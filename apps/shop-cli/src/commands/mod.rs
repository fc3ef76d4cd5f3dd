//! # Menu Commands
//!
//! Each menu entry maps to one handler.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── MenuCommand (numbering and labels)
//! ├── catalog.rs  ◄─── list_products, show_total
//! └── order.rs    ◄─── make_order
//! ```

pub mod catalog;
pub mod order;

/// The entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ListProducts,
    ShowTotal,
    MakeOrder,
    Quit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 4] = [
        MenuCommand::ListProducts,
        MenuCommand::ShowTotal,
        MenuCommand::MakeOrder,
        MenuCommand::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::ListProducts => "List all products in store",
            MenuCommand::ShowTotal => "Show total amount in store",
            MenuCommand::MakeOrder => "Make an order",
            MenuCommand::Quit => "Quit",
        }
    }

    /// Maps a 1-based menu number to its command.
    pub fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}
