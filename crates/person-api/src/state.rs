use person_core::PersonService;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<PersonService>,
}

impl ApiState {
    pub fn new(service: PersonService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
