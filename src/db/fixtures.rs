//! Seeded fixture database for tests.
//!
//! Mirrors the reference data set: patient TCGA-34-7107 with 3 studies,
//! 8 series and 1057 images — one of them the STD CTAC instance matched
//! by [`REFERENCE_FRAGMENT`] — plus a second patient with a single MR
//! study so per-patient filters have something to exclude.

use std::path::Path;

use rusqlite::{params, Connection};

pub const REFERENCE_PATIENT: &str = "TCGA-34-7107";
pub const OTHER_PATIENT: &str = "TCGA-17-Z058";
pub const REFERENCE_FRAGMENT: &str = "1fa2a798-770f-4542-b877-946c0757cac2";

/// Fixture totals: (patients, studies, series, images) across the whole
/// store.
pub const GLOBAL_TOTALS: (i64, i64, i64, i64) = (2, 4, 9, 1067);

const SCHEMA: &str = "
    CREATE TABLE Patients (
        PatientID TEXT PRIMARY KEY
    );
    CREATE TABLE Studies (
        StudyID INTEGER PRIMARY KEY,
        PatientID TEXT NOT NULL REFERENCES Patients(PatientID),
        StudyDescription TEXT
    );
    CREATE TABLE Series (
        SeriesID INTEGER PRIMARY KEY,
        StudyID INTEGER NOT NULL REFERENCES Studies(StudyID),
        SeriesDescription TEXT
    );
    CREATE TABLE Images (
        ImageID INTEGER PRIMARY KEY,
        SeriesID INTEGER NOT NULL REFERENCES Series(SeriesID),
        FilePath TEXT NOT NULL,
        InstanceNumber TEXT,
        WindowCenter TEXT,
        WindowWidth TEXT,
        RescaleIntercept TEXT,
        RescaleSlope TEXT
    );
";

/// Create the four-table store at `path` and seed the reference data.
/// Returns the writable connection used for seeding (tests that want to
/// mutate the fixture can keep it; most drop it immediately).
pub fn create_fixture(path: &Path) -> Connection {
    let conn = Connection::open(path).expect("open fixture database");
    conn.execute_batch("PRAGMA foreign_keys=ON;")
        .expect("enable foreign keys");
    conn.execute_batch(SCHEMA).expect("create fixture schema");
    seed(&conn);
    conn
}

fn seed(conn: &Connection) {
    conn.execute_batch(
        "
        INSERT INTO Patients (PatientID) VALUES
            ('TCGA-34-7107'),
            ('TCGA-17-Z058');
        INSERT INTO Studies (StudyID, PatientID, StudyDescription) VALUES
            (1, 'TCGA-34-7107', 'CT CHEST W/O CONTRAST'),
            (2, 'TCGA-34-7107', 'PET / CT TUMOR IMAGING'),
            (3, 'TCGA-34-7107', 'CT ABDOMEN PELVIS'),
            (4, 'TCGA-17-Z058', 'MR BRAIN W/WO CONTRAST');
        INSERT INTO Series (SeriesID, StudyID, SeriesDescription) VALUES
            (1, 1, 'Axial 5.0'),
            (2, 1, 'Scout'),
            (3, 2, 'STD CTAC'),
            (4, 2, 'PET AC 3D'),
            (5, 2, 'Topogram'),
            (6, 3, 'Axial 2.5'),
            (7, 3, 'Coronal'),
            (8, 3, 'Delayed'),
            (9, 4, 'T1 SAG');
        ",
    )
    .expect("seed fixture patients/studies/series");

    // Image volume per series. Series 1-8 belong to TCGA-34-7107 and
    // total 1057; series 9 belongs to the other patient.
    let volumes: &[(i64, i64)] = &[
        (1, 200),
        (2, 1),
        (3, 400),
        (4, 300),
        (5, 1),
        (6, 100),
        (7, 50),
        (8, 5),
        (9, 10),
    ];

    let mut stmt = conn
        .prepare(
            "INSERT INTO Images
                 (SeriesID, FilePath, InstanceNumber,
                  WindowCenter, WindowWidth, RescaleIntercept, RescaleSlope)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .expect("prepare image insert");

    for &(series_id, count) in volumes {
        for n in 1..=count {
            if series_id == 3 && n == 165 {
                // The reference instance pinned by the filename lookup tests.
                stmt.execute(params![
                    series_id,
                    format!("data/TCGA-34-7107/{REFERENCE_FRAGMENT}.dcm"),
                    "165",
                    "40.0",
                    "400.0",
                    "-1024",
                    "1",
                ])
                .expect("insert reference image");
            } else {
                stmt.execute(params![
                    series_id,
                    format!("data/series-{series_id}/img-{n:04}.dcm"),
                    n.to_string(),
                    "-600.0",
                    "1500.0",
                    "-1024",
                    "1",
                ])
                .expect("insert image");
            }
        }
    }
}
