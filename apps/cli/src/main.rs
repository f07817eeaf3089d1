use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod render;

use ai_assistant_cell::{AssistantController, ChatController};
use appointment_cell::AppointmentController;
use auth_cell::{AuthController, AuthTab, FileStorage, Navigator, Route, SessionManager};
use cli::{
    AppointmentCommand, ChatCommand, Cli, Command, LifestyleCommand, MedicationCommand,
    ProfileCommand, ReportCommand, VitalsCommand, WomensHealthCommand,
};
use dashboard_cell::{Dashboard, Section};
use health_profile_cell::{ProfileController, ProfileTab, VitalsController, VitalsTab};
use lifestyle_cell::{LifestyleController, LifestyleTab};
use medication_cell::MedicationController;
use report_cell::ReportController;
use shared_config::AppConfig;
use shared_models::AppError;
use shared_utils::ToastQueue;
use womens_health_cell::{WomensHealthController, WomensHealthTab};

#[tokio::main]
async fn main() -> ExitCode {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Executes one command. `Ok(false)` means the action ran but was rejected
/// (validation or server error); the reason has already been printed.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = AppConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url);
    }
    if let Some(path) = cli.session_file {
        config = config.with_session_file(path);
    }
    debug!("Using API at {}", config.api_base_url);

    let storage = FileStorage::open(&config.session_file)
        .with_context(|| format!("opening session file {}", config.session_file.display()))?;
    let mut sessions = SessionManager::new(storage);
    let toasts = Arc::new(ToastQueue::new());
    let config = Arc::new(config);

    match cli.command {
        Command::Login(args) => {
            let mut auth = AuthController::new(&config, toasts.clone());
            auth.login_form.email = args.email;
            auth.login_form.password = args.password;
            let route = auth.submit(&mut sessions).await;
            finish_auth(&toasts, route)
        }
        Command::Signup(args) => {
            let mut auth = AuthController::new(&config, toasts.clone());
            auth.switch_tab(AuthTab::Signup);
            auth.signup_form.email = args.email;
            auth.signup_form.password = args.password;
            auth.signup_form.full_name = args.full_name;
            auth.signup_form.age = args.age;
            auth.signup_form.gender = args.gender;
            let route = auth.submit(&mut sessions).await;
            finish_auth(&toasts, route)
        }
        Command::Logout => {
            let route = sessions.logout().context("clearing session")?;
            println!("Signed out. Now at {}", route);
            Ok(true)
        }
        Command::Whoami => {
            match sessions.bootstrap() {
                Some(session) => println!("{} <{}> ({})", session.display_name(), session.email, session.user_id),
                None => println!("Not signed in."),
            }
            Ok(true)
        }
        command => {
            let dashboard = match Dashboard::open(config.clone(), sessions.bootstrap(), toasts.clone()) {
                Ok(dashboard) => dashboard,
                Err(AppError::NotSignedIn) => {
                    let mut nav = Navigator::start(None);
                    let route = nav.navigate(Route::Dashboard, None);
                    println!("You are not signed in. Run `medsage login` first (redirected to {}).", route);
                    return Ok(false);
                }
                Err(err) => return Err(err.into()),
            };
            run_section(dashboard, command, &toasts).await
        }
    }
}

fn finish_auth(toasts: &ToastQueue, route: Option<Route>) -> anyhow::Result<bool> {
    render::flush_toasts(toasts);
    match route {
        Some(route) => {
            info!("Authenticated, navigating to {}", route);
            println!("Now at {}", route);
            Ok(true)
        }
        None => Ok(false),
    }
}

async fn run_section(mut dashboard: Dashboard, command: Command, toasts: &ToastQueue) -> anyhow::Result<bool> {
    let ok = match command {
        Command::Dashboard => {
            println!("{}", dashboard.greeting());
            for section in dashboard.sections() {
                println!("  {:<14} {}", section.slug(), section.label());
            }
            true
        }

        Command::Medication(cmd) => {
            let mut section = MedicationController::new(dashboard.open_section(Section::Medications));
            section.mount().await;
            let ok = match cmd {
                MedicationCommand::List => true,
                MedicationCommand::Add { name, dosage, frequency, start_date, end_date, notes } => {
                    section.form.name = name;
                    section.form.dosage = dosage;
                    section.form.frequency = frequency;
                    section.form.start_date = start_date;
                    section.form.end_date = end_date;
                    section.form.notes = notes;
                    section.submit().await
                }
                MedicationCommand::LogDose { medication_id } => section.log_dose(&medication_id).await,
            };
            let errored = render::flush_toasts(toasts);
            render::medications(section.medications());
            ok && !errored
        }

        Command::Appointment(cmd) => {
            let mut section = AppointmentController::new(dashboard.open_section(Section::Appointments));
            section.mount().await;
            let ok = match cmd {
                AppointmentCommand::List => true,
                AppointmentCommand::Schedule { date, time, doctor, purpose, location, notes } => {
                    section.form.date = date;
                    section.form.time = time;
                    section.form.doctor = doctor;
                    section.form.purpose = purpose;
                    section.form.location = location;
                    section.form.notes = notes;
                    section.submit().await
                }
            };
            let errored = render::flush_toasts(toasts);
            render::appointments(section.appointments());
            ok && !errored
        }

        Command::Report(cmd) => {
            let mut section = ReportController::new(dashboard.open_section(Section::Reports));
            section.mount().await;
            let ok = match cmd {
                ReportCommand::List => true,
                ReportCommand::Upload { file, name, report_type, notes } => {
                    section.form.name = name;
                    section.form.report_type = report_type;
                    section.form.notes = notes;
                    section.select_file_from_path(&file) && section.submit().await
                }
                ReportCommand::Delete { report_id } => section.delete(&report_id).await,
            };
            let errored = render::flush_toasts(toasts);
            render::reports(section.reports());
            ok && !errored
        }

        Command::Lifestyle(cmd) => {
            let mut section = LifestyleController::new(dashboard.open_section(Section::Lifestyle));
            section.mount().await;
            let ok = match cmd {
                LifestyleCommand::Stats => {
                    section.switch_tab(LifestyleTab::Summary);
                    true
                }
                LifestyleCommand::Activity {
                    activity_type, duration, intensity, calories, water_glasses, steps, sleep_hours, notes,
                } => {
                    section.switch_tab(LifestyleTab::Activity);
                    let form = &mut section.activity_form;
                    form.activity_type = activity_type;
                    form.duration = duration;
                    form.intensity = intensity;
                    form.calories = calories;
                    form.water_glasses = water_glasses;
                    form.steps = steps;
                    form.sleep_hours = sleep_hours;
                    form.notes = notes;
                    section.submit_activity().await
                }
                LifestyleCommand::Meal { meal_type, description, calories, protein, carbs, fat, notes } => {
                    section.switch_tab(LifestyleTab::Meal);
                    let form = &mut section.meal_form;
                    form.meal_type = meal_type;
                    form.description = description;
                    form.calories = calories;
                    form.protein = protein;
                    form.carbs = carbs;
                    form.fat = fat;
                    form.notes = notes;
                    section.submit_meal().await
                }
            };
            let errored = render::flush_toasts(toasts);
            render::lifestyle(section.stats(), section.entries());
            ok && !errored
        }

        Command::WomensHealth(cmd) => {
            let mut section = WomensHealthController::new(dashboard.open_section(Section::WomensHealth));
            section.mount().await;
            let ok = match cmd {
                WomensHealthCommand::History => {
                    section.switch_tab(WomensHealthTab::History);
                    true
                }
                WomensHealthCommand::Period { start_date, end_date, flow, notes } => {
                    section.switch_tab(WomensHealthTab::Period);
                    section.period_form.start_date = start_date;
                    section.period_form.end_date = end_date;
                    section.period_form.flow = flow;
                    section.period_form.notes = notes;
                    section.submit_period().await
                }
                WomensHealthCommand::Symptom { symptom_type, severity, date, notes } => {
                    section.switch_tab(WomensHealthTab::Symptoms);
                    section.symptom_form.symptom_type = symptom_type;
                    section.symptom_form.severity = severity;
                    section.symptom_form.date = date;
                    section.symptom_form.notes = notes;
                    section.submit_symptom().await
                }
            };
            let errored = render::flush_toasts(toasts);
            render::womens_health(section.periods(), section.symptoms());
            ok && !errored
        }

        Command::Chat(cmd) => {
            let mut section = ChatController::new(dashboard.open_section(Section::Chat));
            match cmd {
                ChatCommand::History => {
                    section.mount().await;
                    let errored = render::flush_toasts(toasts);
                    render::consultations(section.history());
                    !errored
                }
                ChatCommand::Ask { question } => {
                    section.form.question = question;
                    let answer = section.ask().await;
                    render::flush_toasts(toasts);
                    match answer {
                        Some(answer) => {
                            println!("{}", answer);
                            true
                        }
                        None => false,
                    }
                }
            }
        }

        Command::Profile(cmd) => {
            let mut section = ProfileController::new(dashboard.open_section(Section::Profile));
            section.mount().await;
            let ok = match cmd {
                ProfileCommand::Show => true,
                ProfileCommand::Update {
                    blood_type, height_cm, weight_kg, chronic_conditions, allergies,
                    smoking, alcohol, exercise_frequency, diet_type,
                } => {
                    section.switch_tab(ProfileTab::Edit);
                    let form = &mut section.form;
                    form.blood_type = blood_type;
                    form.height_cm = height_cm;
                    form.weight_kg = weight_kg;
                    form.chronic_conditions = chronic_conditions;
                    form.allergies = allergies;
                    form.smoking = smoking;
                    form.alcohol = alcohol;
                    form.exercise_frequency = exercise_frequency;
                    form.diet_type = diet_type;
                    section.submit().await
                }
            };
            let errored = render::flush_toasts(toasts);
            render::profile(section.profile());
            ok && !errored
        }

        Command::Vitals(cmd) => {
            let days = match &cmd {
                VitalsCommand::History { days } => *days,
                _ => 0,
            };
            let mut section =
                VitalsController::new(dashboard.open_section(Section::Vitals)).with_days(days);
            section.mount().await;
            let ok = match cmd {
                VitalsCommand::History { .. } => {
                    section.switch_tab(VitalsTab::History);
                    true
                }
                VitalsCommand::Score => {
                    section.switch_tab(VitalsTab::Score);
                    true
                }
                VitalsCommand::Record { blood_pressure, heart_rate, temperature, blood_sugar, bmi } => {
                    section.form.blood_pressure = blood_pressure;
                    section.form.heart_rate = heart_rate;
                    section.form.temperature = temperature;
                    section.form.blood_sugar = blood_sugar;
                    section.form.bmi = bmi;
                    section.submit().await
                }
            };
            let errored = render::flush_toasts(toasts);
            match section.active_tab() {
                VitalsTab::Score => render::health_score(section.score()),
                _ => render::vitals(section.vitals(), section.score()),
            }
            ok && !errored
        }

        Command::Assistant { message } => {
            dashboard.open_section(Section::Assistant);
            let mut assistant = AssistantController::new();
            assistant.draft = message;
            match assistant.send() {
                Ok(_) => {
                    render::conversation(assistant.messages());
                    true
                }
                Err(err) => {
                    eprintln!("{}", err.toast_message("Please type a message"));
                    false
                }
            }
        }

        Command::Login(_) | Command::Signup(_) | Command::Logout | Command::Whoami => true,
    };

    Ok(ok)
}
