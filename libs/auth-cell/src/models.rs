use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use shared_models::{AppError, AppResult};
use shared_utils::form::{require, require_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(AppError::validation("Gender must be male, female, or other")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

/// Raw login form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AppResult<LoginRequest> {
        Ok(LoginRequest {
            email: require(&self.email, "Email")?,
            password: require(&self.password, "Password")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub age: String,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub age: u32,
    pub gender: Gender,
}

impl SignupForm {
    pub fn validate(&self) -> AppResult<SignupRequest> {
        let email = require(&self.email, "Email")?;
        let password = require(&self.password, "Password")?;
        let full_name = require(&self.full_name, "Full name")?;
        let age = require_number::<u32>(&self.age, "Age")?;
        let gender = require(&self.gender, "Gender")?.parse::<Gender>()?;

        Ok(SignupRequest { email, password, full_name, age, gender })
    }
}
