// Plain-text views over controller state.

use ai_assistant_cell::{ChatMessage, Consultation, Sender};
use appointment_cell::Appointment;
use health_profile_cell::{HealthScore, UserProfile, VitalSigns};
use lifestyle_cell::{LifestyleEntry, LifestyleStats};
use medication_cell::Medication;
use report_cell::MedicalReport;
use shared_utils::ToastQueue;
use womens_health_cell::{PeriodLog, SymptomLog};

/// Prints and clears pending toasts; returns whether any was an error.
pub fn flush_toasts(toasts: &ToastQueue) -> bool {
    let mut had_error = false;
    for toast in toasts.drain() {
        had_error |= toast.is_error();
        if toast.is_error() {
            eprintln!("{}", toast);
        } else {
            println!("{}", toast);
        }
    }
    had_error
}

fn empty(what: &str) {
    println!("No {} yet.", what);
}

pub fn medications(items: &[Medication]) {
    if items.is_empty() {
        return empty("medications");
    }
    for m in items {
        println!(
            "{}  {} {} ({}), doses logged: {}",
            m.id, m.name, m.dosage, m.frequency, m.doses_logged.count()
        );
        if let Some(notes) = &m.notes {
            println!("    {}", notes);
        }
    }
}

pub fn appointments(items: &[Appointment]) {
    if items.is_empty() {
        return empty("appointments");
    }
    for a in items {
        println!("{}  {} {} with {}: {} [{}]", a.id, a.date, a.time, a.doctor, a.purpose, a.status);
        if let Some(location) = &a.location {
            println!("    at {}", location);
        }
    }
}

pub fn reports(items: &[MedicalReport]) {
    if items.is_empty() {
        return empty("reports");
    }
    for r in items {
        let size = r.file_size.map(|s| format!(", {} KB", s.div_ceil(1024))).unwrap_or_default();
        println!(
            "{}  {} ({}{}) {}",
            r.id,
            r.name,
            r.report_type.label(),
            size,
            r.uploaded_at.as_deref().unwrap_or("")
        );
    }
}

pub fn lifestyle(stats: &LifestyleStats, entries: &[LifestyleEntry]) {
    println!(
        "Activities: {}  Meals: {}  Calories: {:.0}  Avg per meal: {:.0}",
        stats.total_activities, stats.total_meals, stats.total_calories, stats.average_calories_per_meal
    );
    if entries.is_empty() {
        return empty("lifestyle entries");
    }
    for entry in entries {
        match entry {
            LifestyleEntry::Activity(a) => println!(
                "{}  activity: {} {} min",
                a.id,
                a.activity_type,
                a.duration.unwrap_or(0.0)
            ),
            LifestyleEntry::Meal(m) => println!(
                "{}  meal: {} {} ({:.0} kcal)",
                m.id,
                m.meal_type,
                m.description.as_deref().unwrap_or(""),
                entry.calories()
            ),
        }
    }
}

pub fn womens_health(periods: &[PeriodLog], symptoms: &[SymptomLog]) {
    println!("Periods:");
    if periods.is_empty() {
        empty("period logs");
    }
    for p in periods {
        let end = p.end_date.as_deref().unwrap_or("ongoing");
        println!("  {} to {} ({} flow)", p.start_date, end, p.flow);
    }

    println!("Symptoms:");
    if symptoms.is_empty() {
        empty("symptom logs");
    }
    for s in symptoms {
        println!(
            "  {} severity {}/10 {}",
            s.symptom_type,
            s.severity,
            s.date.as_deref().unwrap_or("")
        );
    }
}

pub fn consultations(items: &[Consultation]) {
    if items.is_empty() {
        return empty("consultations");
    }
    for c in items {
        println!("Q: {}", c.question);
        println!("A: {}", c.response);
        println!();
    }
}

pub fn conversation(messages: &[ChatMessage]) {
    for message in messages {
        let who = match message.sender {
            Sender::User => "You",
            Sender::Assistant => "Assistant",
        };
        println!("[{}] {}: {}", message.sent_at.format("%H:%M"), who, message.text);
    }
}

fn or_not_set(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("Not set")
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub fn profile(profile: Option<&UserProfile>) {
    let Some(profile) = profile else {
        return println!("Profile not found.");
    };

    let personal = &profile.personal_info;
    println!("Personal Information:");
    println!("  Age: {}", personal.age.map(|a| format!("{:.0}", a)).unwrap_or_else(|| "Not set".into()));
    println!("  Gender: {}", or_not_set(personal.gender.as_deref()));
    println!("  Blood Type: {}", or_not_set(personal.blood_type.as_deref()));
    println!("  Height: {}", personal.height_cm.map(|h| format!("{} cm", h)).unwrap_or_else(|| "Not set".into()));
    println!("  Weight: {}", personal.weight_kg.map(|w| format!("{} kg", w)).unwrap_or_else(|| "Not set".into()));
    if let Some(bmi) = profile.bmi() {
        println!("  BMI: {:.1}", bmi);
    }

    let medical = &profile.medical_history;
    println!("Medical History:");
    println!("  Chronic Conditions: {}", list_or_none(&medical.chronic_conditions));
    println!("  Allergies: {}", list_or_none(&medical.allergies));
    println!("  Current Medications: {}", list_or_none(&medical.current_medications));

    let lifestyle = &profile.lifestyle;
    println!("Lifestyle:");
    println!("  Smoking: {}", or_not_set(lifestyle.smoking.as_deref()));
    println!("  Alcohol: {}", or_not_set(lifestyle.alcohol.as_deref()));
    println!("  Exercise: {}", or_not_set(lifestyle.exercise_frequency.as_deref()));
    println!("  Diet: {}", or_not_set(lifestyle.diet_type.as_deref()));
}

pub fn health_score(score: Option<&HealthScore>) {
    match score.and_then(|s| s.score.map(|value| (value, s))) {
        Some((value, s)) => {
            let rating = s.rating.as_deref().map(|r| format!(" ({})", r)).unwrap_or_default();
            println!("Health score: {:.0}/100{}", value, rating);
            for tip in &s.recommendations {
                println!("  - {}", tip);
            }
        }
        None => println!("No health score yet."),
    }
}

pub fn vitals(items: &[VitalSigns], score: Option<&HealthScore>) {
    health_score(score);
    if items.is_empty() {
        return empty("vital sign readings");
    }
    for v in items {
        let mut parts = Vec::new();
        if let Some(bp) = &v.blood_pressure {
            parts.push(format!("BP {}", bp));
        }
        if let Some(hr) = v.heart_rate {
            parts.push(format!("HR {:.0} bpm", hr));
        }
        if let Some(t) = v.temperature {
            parts.push(format!("temp {:.1}", t));
        }
        if let Some(sugar) = v.blood_sugar {
            parts.push(format!("sugar {}", sugar));
        }
        if let Some(bmi) = v.bmi {
            parts.push(format!("BMI {:.1}", bmi));
        }
        println!("{}  {}", v.recorded_at.as_deref().unwrap_or(""), parts.join(", "));
    }
}
