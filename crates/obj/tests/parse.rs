use vitrine_mesh::Vector3;
use vitrine_obj::{parse_obj, read_obj, ObjError};
use vitrine_test_data::{OBJ_CUBE, OBJ_TRIANGLE};

const UP: Vector3 = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

#[test]
fn triangle_without_normals_gets_default_up() {
    let mesh = parse_obj(OBJ_TRIANGLE.source.as_bytes()).unwrap();

    assert_eq!(
        mesh.vertices,
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]
    );
    assert_eq!(mesh.normals, vec![UP, UP, UP]);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
}

#[test]
fn cube_flattens_to_three_vertices_per_face() {
    let mesh = parse_obj(OBJ_CUBE.source.as_bytes()).unwrap();

    assert_eq!(mesh.vertices.len(), 3 * OBJ_CUBE.faces);
    assert_eq!(mesh.normals.len(), mesh.vertices.len());
    assert_eq!(mesh.indices.len(), mesh.vertices.len());
    assert_eq!(mesh.vertices.len() % 3, 0);
    assert_eq!(mesh.triangle_count(), OBJ_CUBE.faces);

    // The two back-face triangles reference normal 1 (0, 0, -1).
    for n in &mesh.normals[..6] {
        assert_eq!(*n, Vector3::new(0.0, 0.0, -1.0));
    }
    // Identity draw indices.
    for (i, &index) in mesh.indices.iter().enumerate() {
        assert_eq!(index, i as u32);
    }
}

#[test]
fn full_normal_correspondence_when_every_corner_has_one() {
    let src = b"v 0 0 0\nv 1 0 0\nv 0 1 0\n\
                vn 1 0 0\nvn 0 1 0\nvn 0 0 1\n\
                f 1//1 2//2 3//3\n";
    let mesh = parse_obj(src).unwrap();
    assert_eq!(
        mesh.normals,
        vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]
    );
}

#[test]
fn face_uses_only_first_three_vertex_references() {
    // A quad face contributes exactly one triangle; the 4th reference is
    // dropped rather than fanned into a second triangle.
    let src = b"v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    let mesh = parse_obj(src).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertices[2], Vector3::new(1.0, 1.0, 0.0));
}

#[test]
fn mixed_density_normals_stay_positionally_aligned() {
    // The first face carries no normal references, the second does. The
    // normal stream is aligned to face-vertex occurrences by absolute
    // position, so the second face's normals land on the *first* face's
    // corners and the second face falls back to the default. This mirrors
    // the flattening strategy existing assets depend on.
    let src = b"v 0 0 0\nv 1 0 0\nv 0 1 0\n\
                vn 1 0 0\nvn 0 1 0\nvn 0 0 1\n\
                f 1 2 3\n\
                f 1//1 2//2 3//3\n";
    let mesh = parse_obj(src).unwrap();

    assert_eq!(mesh.normals.len(), 6);
    assert_eq!(mesh.normals[0], Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.normals[1], Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(mesh.normals[2], Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(&mesh.normals[3..], &[UP, UP, UP]);
}

#[test]
fn texture_only_reference_contributes_no_normal() {
    let src = b"v 0 0 0\nv 1 0 0\nv 0 1 0\n\
                vn 1 0 0\n\
                vt 0 0\n\
                f 1/1 2/1 3/1\n";
    let mesh = parse_obj(src).unwrap();
    assert_eq!(mesh.normals, vec![UP, UP, UP]);
}

#[test]
fn out_of_range_normal_index_falls_back_to_default() {
    let src = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 1 0 0\nf 1//9 2//9 3//9\n";
    let mesh = parse_obj(src).unwrap();
    assert_eq!(mesh.normals, vec![UP, UP, UP]);
}

#[test]
fn out_of_range_vertex_index_is_rejected() {
    let src = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 5\n";
    match parse_obj(src) {
        Err(ObjError::MalformedGeometry { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected MalformedGeometry, got {other:?}"),
    }
}

#[test]
fn zero_vertex_index_is_rejected() {
    let src = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
    assert!(matches!(
        parse_obj(src),
        Err(ObjError::MalformedGeometry { line: 4, .. })
    ));
}

#[test]
fn short_face_line_is_rejected() {
    let src = b"v 0 0 0\nv 1 0 0\nf 1 2\n";
    assert!(matches!(
        parse_obj(src),
        Err(ObjError::MalformedGeometry { line: 3, .. })
    ));
}

#[test]
fn incomplete_vertex_line_is_rejected() {
    let src = b"v 0 0\n";
    assert!(matches!(
        parse_obj(src),
        Err(ObjError::MalformedGeometry { line: 1, .. })
    ));
}

#[test]
fn unknown_directives_are_ignored() {
    let src = b"# comment\no thing\ng group\nusemtl none\ns off\n\n\
                v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1 2 3\n";
    let mesh = parse_obj(src).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn parsing_is_deterministic() {
    let a = parse_obj(OBJ_CUBE.source.as_bytes()).unwrap();
    let b = parse_obj(OBJ_CUBE.source.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_file_is_an_io_error() {
    match read_obj("definitely-not-here.obj") {
        Err(ObjError::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}
