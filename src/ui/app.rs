use chrono::Local;

use crate::config::BudgetSource;
use crate::models::OrderRecord;
use crate::session::Session;
use crate::ui::form::OrderForm;
use crate::ui::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Orders,
    Summary,
    Budget,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Orders, Self::Summary, Self::Budget]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orders => write!(f, "Siparişler"),
            Self::Summary => write!(f, "Bütçe Özeti"),
            Self::Budget => write!(f, "Yıllık Bütçe"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "ORDER"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) session: Session,
    pub(crate) budget_source: BudgetSource,
    pub(crate) form: OrderForm,

    // Orders list
    pub(crate) order_index: usize,
    pub(crate) order_scroll: usize,

    // Summary / budget tables
    pub(crate) row_index: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(session: Session, budget_source: BudgetSource) -> Self {
        Self {
            running: true,
            screen: Screen::Orders,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            session,
            budget_source,
            form: OrderForm::new(Local::now().date_naive()),

            order_index: 0,
            order_scroll: 0,
            row_index: 0,

            visible_rows: 20,
        }
    }

    pub(crate) fn open_form(&mut self) {
        self.screen = Screen::Orders;
        self.input_mode = InputMode::Form;
        self.set_status("Tab: next field | +/-: change | Enter: save | Esc: cancel");
    }

    /// Submit the order form. Validation failures stay in the form.
    pub(crate) fn submit_form(&mut self) {
        match self.form.build(self.session.budget()) {
            Ok(order) => {
                self.record_order(order);
                self.form.reset_amounts();
                self.input_mode = InputMode::Normal;
            }
            Err(msg) => self.set_status(msg),
        }
    }

    /// Append an order and report it on the status line.
    pub(crate) fn record_order(&mut self, order: OrderRecord) {
        let message = format!(
            "{} için {} tutarında sipariş eklendi.",
            order.category(),
            format_amount(order.amount())
        );
        let budgeted = self.session.submit(order);
        self.select_last_order();
        if budgeted {
            self.set_status(message);
        } else {
            self.set_status(format!(
                "{message} Kategori bütçede yok; özet tablosuna yansımaz."
            ));
        }
    }

    pub(crate) fn select_last_order(&mut self) {
        let len = self.session.ledger().len();
        crate::ui::util::scroll_to_bottom(
            &mut self.order_index,
            &mut self.order_scroll,
            len,
            self.visible_rows,
        );
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
