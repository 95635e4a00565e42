use crate::bank::{AuthorizationRequest, AuthorizationVerdict, Authorizer, AuthorizerError};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    AlwaysAuthorize,
    AlwaysDecline,
    AlwaysUnavailable,
    // odd last digit authorizes, even declines, 0 fails
    CardParity,
}

impl MockBehavior {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "ALWAYS_AUTHORIZE" => Some(MockBehavior::AlwaysAuthorize),
            "ALWAYS_DECLINE" => Some(MockBehavior::AlwaysDecline),
            "ALWAYS_UNAVAILABLE" => Some(MockBehavior::AlwaysUnavailable),
            "CARD_PARITY" => Some(MockBehavior::CardParity),
            _ => None,
        }
    }
}

pub struct MockAuthorizer {
    pub behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockAuthorizer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Authorizer for MockAuthorizer {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationVerdict, AuthorizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::AlwaysAuthorize => Ok(approved()),
            MockBehavior::AlwaysDecline => Ok(declined()),
            MockBehavior::AlwaysUnavailable => {
                Err(AuthorizerError::Unavailable("mock outage".to_string()))
            }
            MockBehavior::CardParity => match request
                .card_number
                .chars()
                .last()
                .and_then(|c| c.to_digit(10))
            {
                Some(0) | None => Err(AuthorizerError::Unavailable(
                    "card routed to failing issuer".to_string(),
                )),
                Some(d) if d % 2 == 1 => Ok(approved()),
                Some(_) => Ok(declined()),
            },
        }
    }
}

fn approved() -> AuthorizationVerdict {
    AuthorizationVerdict {
        authorized: true,
        authorization_code: Some(uuid::Uuid::new_v4().to_string()),
    }
}

fn declined() -> AuthorizationVerdict {
    AuthorizationVerdict {
        authorized: false,
        authorization_code: None,
    }
}
