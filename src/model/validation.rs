//! Shape checks applied to request bodies before they leave the browser.
//!
//! The backend remains the authority on referential rules (a member's plan
//! must exist, affiliate codes are unique); these checks only reject payloads
//! that could never be accepted.

use std::fmt;

use uuid::Uuid;

use crate::model::{
    affiliate::{CreateAffiliateDto, UpdateAffiliateDto},
    api::FieldErrors,
    member::{CreateMemberDto, UpdateMemberDto},
    plan::{CreatePlanDto, UpdatePlanDto},
};

const PLAN_NAME_MIN: usize = 3;
const PLAN_NAME_MAX: usize = 100;
const PLAN_PRICE_MAX: f64 = 1_000_000.0;
const PLAN_BENEFITS_MIN: usize = 10;
const PLAN_BENEFITS_MAX: usize = 500;

const PERSON_NAME_MIN: usize = 3;
const PERSON_NAME_MAX: usize = 200;
const EMAIL_MAX: usize = 255;
const PHONE_MIN: usize = 10;
const PHONE_MAX: usize = 11;

const CODE_MIN: usize = 6;
const CODE_MAX: usize = 20;

/// Violated constraints keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: FieldErrors,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &FieldErrors {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Request bodies that can be checked before transmission.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for CreatePlanDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_plan_name(&mut errors, &self.name);
        check_plan_price(&mut errors, self.monthly_price);
        check_plan_benefits(&mut errors, &self.benefits);
        errors.into_result()
    }
}

impl Validate for UpdatePlanDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            check_plan_name(&mut errors, name);
        }
        if let Some(price) = self.monthly_price {
            check_plan_price(&mut errors, price);
        }
        if let Some(benefits) = &self.benefits {
            check_plan_benefits(&mut errors, benefits);
        }
        errors.into_result()
    }
}

impl Validate for CreateMemberDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_person_name(&mut errors, &self.name);
        check_email(&mut errors, &self.email);
        check_phone(&mut errors, &self.phone);
        check_uuid(&mut errors, "planoId", &self.plan_id, "ID do plano inválido");
        if let Some(affiliate_id) = &self.affiliate_id {
            check_uuid(&mut errors, "afiliadoId", affiliate_id, "ID do afiliado inválido");
        }
        errors.into_result()
    }
}

impl Validate for UpdateMemberDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            check_person_name(&mut errors, name);
        }
        if let Some(email) = &self.email {
            check_email(&mut errors, email);
        }
        if let Some(phone) = &self.phone {
            check_phone(&mut errors, phone);
        }
        if let Some(plan_id) = &self.plan_id {
            check_uuid(&mut errors, "planoId", plan_id, "ID do plano inválido");
        }
        if let Some(Some(affiliate_id)) = &self.affiliate_id {
            check_uuid(&mut errors, "afiliadoId", affiliate_id, "ID do afiliado inválido");
        }
        errors.into_result()
    }
}

impl Validate for CreateAffiliateDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_person_name(&mut errors, &self.name);
        check_code(&mut errors, &self.code);
        errors.into_result()
    }
}

impl Validate for UpdateAffiliateDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            check_person_name(&mut errors, name);
        }
        if let Some(code) = &self.code {
            check_code(&mut errors, code);
        }
        errors.into_result()
    }
}

fn check_plan_name(errors: &mut ValidationErrors, name: &str) {
    check_length(
        errors,
        "nome",
        name,
        (PLAN_NAME_MIN, "Nome deve ter no mínimo 3 caracteres"),
        (PLAN_NAME_MAX, "Nome deve ter no máximo 100 caracteres"),
    );
}

fn check_plan_price(errors: &mut ValidationErrors, price: f64) {
    if price.is_nan() || price <= 0.0 {
        errors.add("precoMensal", "Preço deve ser positivo");
    } else if price > PLAN_PRICE_MAX {
        errors.add("precoMensal", "Preço muito alto");
    }
}

fn check_plan_benefits(errors: &mut ValidationErrors, benefits: &str) {
    check_length(
        errors,
        "beneficios",
        benefits,
        (PLAN_BENEFITS_MIN, "Benefícios devem ter no mínimo 10 caracteres"),
        (PLAN_BENEFITS_MAX, "Benefícios devem ter no máximo 500 caracteres"),
    );
}

fn check_person_name(errors: &mut ValidationErrors, name: &str) {
    check_length(
        errors,
        "nome",
        name,
        (PERSON_NAME_MIN, "Nome deve ter no mínimo 3 caracteres"),
        (PERSON_NAME_MAX, "Nome deve ter no máximo 200 caracteres"),
    );
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if !is_email(email) {
        errors.add("email", "Email inválido");
    }
    if email.chars().count() > EMAIL_MAX {
        errors.add("email", "Email muito longo");
    }
}

fn check_phone(errors: &mut ValidationErrors, phone: &str) {
    check_length(
        errors,
        "telefone",
        phone,
        (PHONE_MIN, "Telefone deve ter no mínimo 10 caracteres"),
        (PHONE_MAX, "Telefone deve ter no máximo 11 caracteres"),
    );
}

fn check_code(errors: &mut ValidationErrors, code: &str) {
    check_length(
        errors,
        "codigo",
        code,
        (CODE_MIN, "Código deve ter no mínimo 6 caracteres"),
        (CODE_MAX, "Código deve ter no máximo 20 caracteres"),
    );
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.add("codigo", "Código deve conter apenas letras e números");
    }
}

fn check_uuid(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if Uuid::parse_str(value).is_err() {
        errors.add(field, message);
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    (min, min_message): (usize, &str),
    (max, max_message): (usize, &str),
) {
    let len = value.chars().count();
    if len < min {
        errors.add(field, min_message);
    } else if len > max {
        errors.add(field, max_message);
    }
}

/// Loose `local@domain.tld` check, the same shape browsers accept for
/// `type="email"` inputs.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !domain.starts_with('.')
}
