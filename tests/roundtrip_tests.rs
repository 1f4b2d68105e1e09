mod common;

use common::{BuilderCall, RecordingProject};
use mapcast::{ImagePaint, Point, TriangleMapping, Uid, read_project, write_project};

#[test]
fn written_documents_read_back_with_identical_values() {
    let paints = vec![
        ImagePaint {
            id: Uid::new(1),
            name: "backdrop".to_string(),
            uri: "images/backdrop.png".to_string(),
            x: 0.25,
            y: -3.5,
        },
        ImagePaint {
            id: Uid::new(2),
            name: "logo".to_string(),
            uri: "images/logo.png".to_string(),
            x: 100.0,
            y: 50.0,
        },
    ];
    let mappings = vec![TriangleMapping {
        id: Uid::new(3),
        paint_id: Uid::new(1),
        source: [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 1.0),
        ],
        destination: [
            Point::new(10.5, 10.0),
            Point::new(210.0, 12.0),
            Point::new(98.75, 170.0),
        ],
    }];

    let xml = write_project(&paints, &mappings).unwrap();

    let mut project = RecordingProject::new();
    let report = read_project(&xml, &mut project);

    assert!(report.succeeded(), "unexpected errors: {:?}", report.errors);
    assert_eq!(report.entities_created, 3);
    assert_eq!(
        project.calls,
        vec![
            BuilderCall::ImagePaint {
                id: Uid::new(1),
                uri: "images/backdrop.png".to_string(),
                x: 0.25,
                y: -3.5,
            },
            BuilderCall::ImagePaint {
                id: Uid::new(2),
                uri: "images/logo.png".to_string(),
                x: 100.0,
                y: 50.0,
            },
            BuilderCall::TriangleTextureMapping {
                id: Uid::new(3),
                paint_id: Uid::new(1),
                source: vec![
                    Point::new(0.0, 0.0),
                    Point::new(1.0, 0.0),
                    Point::new(0.5, 1.0),
                ],
                destination: vec![
                    Point::new(10.5, 10.0),
                    Point::new(210.0, 12.0),
                    Point::new(98.75, 170.0),
                ],
            },
        ]
    );
}

#[test]
fn empty_projects_round_trip_cleanly() {
    let xml = write_project(&[], &[]).unwrap();

    let mut project = RecordingProject::new();
    let report = read_project(&xml, &mut project);

    assert!(report.succeeded());
    assert_eq!(report.entities_created, 0);
    assert!(project.calls.is_empty());
}
