use qaboard_core::session::Session;

/// Which auth input has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
}

impl AuthField {
    pub fn toggle(self) -> Self {
        match self {
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Email,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Session,
    pub email: String,
    pub password: String,
    pub field: AuthField,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn focused_buffer(&mut self) -> &mut String {
        match self.field {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }
}
