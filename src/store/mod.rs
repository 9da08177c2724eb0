//! In-process document store backing the Guru collections.
//! Each collection is a map keyed by document id behind its own async
//! `RwLock`, so independent requests only contend within one collection.
//! Every operation is an independent point read/write or a single
//! email-filtered scan; nothing spans collections.

pub mod models;

use std::collections::HashMap;

use tokio::sync::RwLock;

pub use models::{
    new_id, CartDoc, ClassDoc, ClassPatch, EnrollmentDoc, NewCart, NewClass, NewEnrollment,
    NewPayment, NewUser, PaymentDoc, Role, RolePatch, UserDoc,
};

/// Outcome of the upsert-by-email user creation.
#[derive(Debug, Clone)]
pub enum UpsertOutcome {
    Inserted(UserDoc),
    AlreadyExists,
}

#[derive(Default)]
pub struct Store {
    classes: RwLock<HashMap<String, ClassDoc>>,
    users: RwLock<HashMap<String, UserDoc>>,
    carts: RwLock<HashMap<String, CartDoc>>,
    payments: RwLock<HashMap<String, PaymentDoc>>,
    enrollments: RwLock<HashMap<String, EnrollmentDoc>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // --- classes ---

    pub async fn list_classes(&self) -> Vec<ClassDoc> {
        self.classes.read().await.values().cloned().collect()
    }

    pub async fn insert_class(&self, new: NewClass) -> ClassDoc {
        let doc = ClassDoc {
            id: new_id(),
            name: new.name,
            instructor_name: new.instructor_name,
            instructor_email: new.instructor_email,
            available_seats: new.available_seats,
            price: new.price,
            status: "pending".to_string(),
            feedback: None,
            enrolled: 0,
        };
        self.classes.write().await.insert(doc.id.clone(), doc.clone());
        doc
    }

    pub async fn find_class(&self, id: &str) -> Option<ClassDoc> {
        self.classes.read().await.get(id).cloned()
    }

    /// Apply a moderation patch and bump the enrollment counter by exactly
    /// one. Returns the updated document, or `None` when the id is unknown.
    pub async fn patch_class(&self, id: &str, patch: ClassPatch) -> Option<ClassDoc> {
        let mut classes = self.classes.write().await;
        let doc = classes.get_mut(id)?;
        if let Some(status) = patch.status {
            doc.status = status;
        }
        if let Some(feedback) = patch.feedback {
            doc.feedback = Some(feedback);
        }
        doc.enrolled += 1;
        Some(doc.clone())
    }

    // --- users ---

    pub async fn list_users(&self) -> Vec<UserDoc> {
        self.users.read().await.values().cloned().collect()
    }

    /// Create the user unless a record with the same email already exists.
    /// The second call with an email is a no-op.
    pub async fn insert_user_if_absent(&self, new: NewUser) -> UpsertOutcome {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new.email) {
            return UpsertOutcome::AlreadyExists;
        }
        let doc = UserDoc {
            id: new_id(),
            name: new.name,
            email: new.email,
            role: Role::Unset,
        };
        users.insert(doc.id.clone(), doc.clone());
        UpsertOutcome::Inserted(doc)
    }

    /// Point read keyed by the unique email; used by the role gates.
    pub async fn find_user_by_email(&self, email: &str) -> Option<UserDoc> {
        self.users.read().await.values().find(|u| u.email == email).cloned()
    }

    pub async fn set_user_role(&self, id: &str, role: Role) -> Option<UserDoc> {
        let mut users = self.users.write().await;
        let doc = users.get_mut(id)?;
        doc.role = role;
        Some(doc.clone())
    }

    // --- carts ---

    pub async fn insert_cart(&self, new: NewCart) -> CartDoc {
        let doc = CartDoc { id: new_id(), class_id: new.class_id, email: new.email };
        self.carts.write().await.insert(doc.id.clone(), doc.clone());
        doc
    }

    pub async fn carts_for(&self, email: &str) -> Vec<CartDoc> {
        self.carts.read().await.values().filter(|c| c.email == email).cloned().collect()
    }

    pub async fn delete_cart(&self, id: &str) -> Option<CartDoc> {
        self.carts.write().await.remove(id)
    }

    // --- payments ---

    pub async fn insert_payment(&self, doc: PaymentDoc) -> PaymentDoc {
        self.payments.write().await.insert(doc.id.clone(), doc.clone());
        doc
    }

    pub async fn payments_for(&self, email: &str) -> Vec<PaymentDoc> {
        let mut out: Vec<PaymentDoc> =
            self.payments.read().await.values().filter(|p| p.email == email).cloned().collect();
        // Newest first, matching the frontend's history view.
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    // --- enrollments ---

    pub async fn insert_enrollment(&self, doc: EnrollmentDoc) -> EnrollmentDoc {
        self.enrollments.write().await.insert(doc.id.clone(), doc.clone());
        doc
    }

    pub async fn enrollments_for(&self, email: &str) -> Vec<EnrollmentDoc> {
        self.enrollments
            .read()
            .await
            .values()
            .filter(|e| e.email == email)
            .cloned()
            .collect()
    }
}
