use crate::settings;

pub(crate) struct ServerState {
    pub(crate) settings: settings::Settings,
}
