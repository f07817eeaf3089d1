use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "medsage", about = "MedSage personal health tracker")]
pub struct Cli {
    /// API base URL; overrides MEDSAGE_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file; overrides MEDSAGE_SESSION_FILE.
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Signup(SignupArgs),
    Login(LoginArgs),
    Logout,
    Whoami,
    Dashboard,
    #[command(subcommand)]
    Medication(MedicationCommand),
    #[command(subcommand)]
    Appointment(AppointmentCommand),
    #[command(subcommand)]
    Report(ReportCommand),
    #[command(subcommand)]
    Lifestyle(LifestyleCommand),
    #[command(subcommand)]
    WomensHealth(WomensHealthCommand),
    #[command(subcommand)]
    Chat(ChatCommand),
    #[command(subcommand)]
    Profile(ProfileCommand),
    #[command(subcommand)]
    Vitals(VitalsCommand),
    /// Talk to the offline AI Doctor Assistant.
    Assistant {
        message: String,
    },
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "MEDSAGE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "MEDSAGE_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub age: String,
    /// male, female or other
    #[arg(long)]
    pub gender: String,
}

#[derive(Subcommand, Debug)]
pub enum MedicationCommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        dosage: String,
        #[arg(long)]
        frequency: String,
        #[arg(long, default_value = "")]
        start_date: String,
        #[arg(long, default_value = "")]
        end_date: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    LogDose {
        medication_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppointmentCommand {
    List,
    Schedule {
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
        #[arg(long)]
        doctor: String,
        #[arg(long)]
        purpose: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    List,
    Upload {
        file: PathBuf,
        /// Defaults to the file name without its extension.
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "other")]
        report_type: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    Delete {
        report_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum LifestyleCommand {
    Stats,
    Activity {
        #[arg(long)]
        activity_type: String,
        /// Minutes of exercise.
        #[arg(long)]
        duration: String,
        #[arg(long, default_value = "")]
        intensity: String,
        #[arg(long, default_value = "")]
        calories: String,
        #[arg(long, default_value = "")]
        water_glasses: String,
        #[arg(long, default_value = "")]
        steps: String,
        #[arg(long, default_value = "")]
        sleep_hours: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    Meal {
        /// breakfast, lunch, dinner or snack
        #[arg(long)]
        meal_type: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        calories: String,
        #[arg(long, default_value = "")]
        protein: String,
        #[arg(long, default_value = "")]
        carbs: String,
        #[arg(long, default_value = "")]
        fat: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum WomensHealthCommand {
    History,
    Period {
        #[arg(long)]
        start_date: String,
        #[arg(long, default_value = "")]
        end_date: String,
        /// light, medium or heavy
        #[arg(long, default_value = "")]
        flow: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    Symptom {
        #[arg(long)]
        symptom_type: String,
        /// 1 to 10
        #[arg(long, default_value = "5")]
        severity: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChatCommand {
    History,
    Ask {
        question: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    Show,
    /// Blank options are left unchanged.
    Update {
        #[arg(long, default_value = "")]
        blood_type: String,
        #[arg(long, default_value = "")]
        height_cm: String,
        #[arg(long, default_value = "")]
        weight_kg: String,
        /// Comma-separated.
        #[arg(long, default_value = "")]
        chronic_conditions: String,
        /// Comma-separated.
        #[arg(long, default_value = "")]
        allergies: String,
        #[arg(long, default_value = "")]
        smoking: String,
        #[arg(long, default_value = "")]
        alcohol: String,
        #[arg(long, default_value = "")]
        exercise_frequency: String,
        #[arg(long, default_value = "")]
        diet_type: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum VitalsCommand {
    History {
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    Score,
    Record {
        /// systolic/diastolic, e.g. 120/80
        #[arg(long, default_value = "")]
        blood_pressure: String,
        #[arg(long, default_value = "")]
        heart_rate: String,
        #[arg(long, default_value = "")]
        temperature: String,
        #[arg(long, default_value = "")]
        blood_sugar: String,
        #[arg(long, default_value = "")]
        bmi: String,
    },
}
