//! Write TypeScript declarations for every wire type to `shared/types.ts`
//! (or the path given as the first argument), so the three front-ends stay in
//! step with the API.

use std::path::PathBuf;

use anyhow::Context;
use ts_rs::TS;

fn declarations() -> Vec<String> {
    vec![
        companion::VoiceIntent::decl(),
        companion::voice::VoiceCommandOutcome::decl(),
        companion::InterfaceMode::decl(),
        companion::PendingField::decl(),
        companion::SessionTurn::decl(),
        companion::voice::SessionSnapshot::decl(),
        companion::BoundingBox::decl(),
        companion::DetectedObject::decl(),
        companion::ObjectDetectionReport::decl(),
        companion::SignDetection::decl(),
        companion::AlertKind::decl(),
        companion::SoundAlert::decl(),
        companion::StepKind::decl(),
        companion::RouteStep::decl(),
        companion::navigation::AccessibilityInfo::decl(),
        companion::RoutePlan::decl(),
        companion::RoutePreferences::decl(),
        companion::RouteRequest::decl(),
        companion::TransportKind::decl(),
        companion::TransportStatus::decl(),
        companion::TransportArrival::decl(),
        server::error::ErrorBody::decl(),
        server::routes::health::HealthResponse::decl(),
        server::routes::voice::VoiceCommandRequest::decl(),
        server::routes::navigation::RouteResponse::decl(),
        server::routes::navigation::TransportResponse::decl(),
        server::routes::sessions::CreateSessionRequest::decl(),
        server::routes::sessions::SessionCreated::decl(),
        server::routes::sessions::RequestFieldBody::decl(),
        server::routes::sessions::SignPollResponse::decl(),
        server::routes::sessions::AlertResponse::decl(),
    ]
}

fn main() -> anyhow::Result<()> {
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("shared/types.ts"));

    let mut contents =
        String::from("// This file was generated by `generate_types`. Do not edit.\n\n");
    for decl in declarations() {
        contents.push_str("export ");
        contents.push_str(&decl);
        contents.push_str("\n\n");
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&out, contents).with_context(|| format!("Failed to write {}", out.display()))?;

    println!("Wrote {}", out.display());
    Ok(())
}
