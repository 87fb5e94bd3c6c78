//! Generate a health report for a short heat-stress episode

fn main() {
    let json = r#"[
        { "id": 1, "created_at": "2024-07-10T12:00:00Z", "plant_id": "basil-01", "temperature": 27.0, "humidity": 58.0, "soil_moisture": 520, "bio_signal": 505 },
        { "id": 2, "created_at": "2024-07-10T12:05:00Z", "plant_id": "basil-01", "temperature": 33.5, "humidity": 41.0, "soil_moisture": 470, "bio_signal": 560 },
        { "id": 3, "created_at": "2024-07-10T12:10:00Z", "plant_id": "basil-01", "temperature": 37.0, "humidity": 35.0, "soil_moisture": 410, "bio_signal": 610, "stress_type": "heat" },
        { "id": 4, "created_at": "2024-07-10T12:15:00Z", "plant_id": "basil-01", "temperature": 39.5, "humidity": 30.0, "soil_moisture": 360, "vibration": 12, "bio_signal": 640, "stress_type": "heat" }
    ]"#;

    match plant_flux::readings_to_report(json.to_string()) {
        Ok(Some(report)) => print!("{report}"),
        Ok(None) => eprintln!("No readings"),
        Err(e) => eprintln!("Error: {e:?}"),
    }
}
