//! User Notifications
//!
//! Modal alerts shown for validation errors, request failures and success.

use crate::error::MissingField;

/// Alert title and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn load_failed() -> Self {
        Self::new("Ops", "Não foi possível carregar as informações dos hábitos")
    }

    pub fn toggle_failed() -> Self {
        Self::new("Ops", "Não foi possível atualizar o status do hábito.")
    }

    pub fn create_failed() -> Self {
        Self::new("Ops", "Não foi possível criar o novo hábito.")
    }

    pub fn created() -> Self {
        Self::new("Novo hábito", "Hábito criado com sucesso")
    }

    pub fn config_failed(reason: &str) -> Self {
        Self::new("Ops", &format!("Não foi possível salvar o endereço da API: {}", reason))
    }

    pub fn config_saved() -> Self {
        Self::new("Configurações", "Endereço da API salvo")
    }

    /// Names every missing field of the habit draft
    pub fn missing(fields: &[MissingField]) -> Self {
        let title = fields.contains(&MissingField::Title);
        let week_days = fields.contains(&MissingField::WeekDays);
        let message = match (title, week_days) {
            (true, true) => "Informe o nome do hábito e escolha a periodicidade",
            (true, false) => "Informe o nome do hábito",
            _ => "Escolha a periodicidade",
        };
        Self::new("Novo hábito", message)
    }
}

/// Shows notices to the user
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Browser `alert()`; blocks until dismissed
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        if let Some(window) = web_sys::window() {
            let text = format!("{}\n\n{}", notice.title, notice.message);
            if window.alert_with_message(&text).is_err() {
                log::warn!("alert failed: {}", notice.message);
            }
        }
    }
}
