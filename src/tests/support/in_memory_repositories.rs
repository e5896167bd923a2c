//! Repository doubles backed by process memory.
//!
//! Each double counts every port call so gate tests can assert that a
//! rejected request never reached the store.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::certification::application::domain::entities::{Certification, CertificationFields};
use crate::certification::application::ports::outgoing::{
    CertificationRepository, CertificationRepositoryError,
};
use crate::contact::application::domain::entities::{ContactMessage, ContactMessageFields};
use crate::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::experience::application::domain::entities::{Experience, ExperienceFields};
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::project::application::domain::entities::{Project, ProjectFields};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::skill::application::domain::entities::{Skill, SkillFields};
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

struct Shared<T> {
    rows: RwLock<Vec<T>>,
    calls: AtomicUsize,
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<T: Clone> Shared<T> {
    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn snapshot(&self) -> Vec<T> {
        self.rows.read().unwrap().clone()
    }
}

/// Id-keyed collections share one shape: list in insertion order, replace
/// in place on update, ignore unknown ids on delete.
macro_rules! id_keyed_repository {
    (
        $name:ident,
        $port:ident,
        $entity:ident,
        $fields:ident,
        $error:ident,
        $into:ident
    ) => {
        #[derive(Clone, Default)]
        pub struct $name {
            inner: Arc<Shared<$entity>>,
        }

        impl $name {
            pub fn calls(&self) -> usize {
                self.inner.calls.load(Ordering::SeqCst)
            }

            pub fn snapshot(&self) -> Vec<$entity> {
                self.inner.snapshot()
            }

            /// Inserts without counting as a port call.
            pub fn seed(&self, fields: $fields) -> $entity {
                let entity = fields.$into(Uuid::new_v4());
                self.inner.rows.write().unwrap().push(entity.clone());
                entity
            }
        }

        #[async_trait]
        impl $port for $name {
            async fn list(&self) -> Result<Vec<$entity>, $error> {
                self.inner.touch();
                Ok(self.inner.snapshot())
            }

            async fn create(&self, fields: $fields) -> Result<$entity, $error> {
                self.inner.touch();
                let entity = fields.$into(Uuid::new_v4());
                self.inner.rows.write().unwrap().push(entity.clone());
                Ok(entity)
            }

            async fn update(&self, id: Uuid, fields: $fields) -> Result<$entity, $error> {
                self.inner.touch();
                let mut rows = self.inner.rows.write().unwrap();
                let slot = rows
                    .iter_mut()
                    .find(|row| row.id == id)
                    .ok_or($error::NotFound)?;
                *slot = fields.$into(id);
                Ok(slot.clone())
            }

            async fn delete(&self, id: Uuid) -> Result<(), $error> {
                self.inner.touch();
                self.inner.rows.write().unwrap().retain(|row| row.id != id);
                Ok(())
            }
        }
    };
}

id_keyed_repository!(
    InMemoryProjectRepository,
    ProjectRepository,
    Project,
    ProjectFields,
    ProjectRepositoryError,
    into_project
);

id_keyed_repository!(
    InMemoryExperienceRepository,
    ExperienceRepository,
    Experience,
    ExperienceFields,
    ExperienceRepositoryError,
    into_experience
);

id_keyed_repository!(
    InMemoryCertificationRepository,
    CertificationRepository,
    Certification,
    CertificationFields,
    CertificationRepositoryError,
    into_certification
);

// ============================================================================
// Skills: keyed by unique name
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemorySkillRepository {
    inner: Arc<Shared<Skill>>,
}

impl InMemorySkillRepository {
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Skill> {
        self.inner.snapshot()
    }

    pub fn seed(&self, fields: SkillFields) -> Skill {
        let skill = fields.into_skill();
        self.inner.rows.write().unwrap().push(skill.clone());
        skill
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        self.inner.touch();
        Ok(self.inner.snapshot())
    }

    async fn create(&self, fields: SkillFields) -> Result<Skill, SkillRepositoryError> {
        self.inner.touch();
        let mut rows = self.inner.rows.write().unwrap();
        if rows.iter().any(|s| s.name == fields.name()) {
            return Err(SkillRepositoryError::SkillAlreadyExists);
        }
        let skill = fields.into_skill();
        rows.push(skill.clone());
        Ok(skill)
    }

    async fn update(
        &self,
        original_name: &str,
        fields: SkillFields,
    ) -> Result<Skill, SkillRepositoryError> {
        self.inner.touch();
        let mut rows = self.inner.rows.write().unwrap();
        let index = rows
            .iter()
            .position(|s| s.name == original_name)
            .ok_or(SkillRepositoryError::NotFound)?;
        if fields.name() != original_name && rows.iter().any(|s| s.name == fields.name()) {
            return Err(SkillRepositoryError::SkillAlreadyExists);
        }
        rows[index] = fields.into_skill();
        Ok(rows[index].clone())
    }

    async fn delete(&self, name: &str) -> Result<(), SkillRepositoryError> {
        self.inner.touch();
        self.inner.rows.write().unwrap().retain(|s| s.name != name);
        Ok(())
    }
}

// ============================================================================
// Contact inbox: newest first
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryContactMessageRepository {
    inner: Arc<Shared<ContactMessage>>,
}

impl InMemoryContactMessageRepository {
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<ContactMessage> {
        self.inner.snapshot()
    }

    pub fn seed(&self, fields: ContactMessageFields) -> ContactMessage {
        let message = fields.into_contact_message(Uuid::new_v4(), Utc::now());
        self.inner.rows.write().unwrap().push(message.clone());
        message
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        self.inner.touch();
        let mut messages = self.inner.snapshot();
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(messages)
    }

    async fn create(
        &self,
        fields: ContactMessageFields,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        self.inner.touch();
        let message = fields.into_contact_message(Uuid::new_v4(), Utc::now());
        self.inner.rows.write().unwrap().push(message.clone());
        Ok(message)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        self.inner.touch();
        self.inner.rows.write().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}
