use super::*;

#[test]
fn test_parse_minimal() {
    let instance = parse_pace("p ds 3 2\n\t1 2\n\t2 3\n".as_bytes()).unwrap();
    assert_eq!(instance.num_vertices, 3);
    assert_eq!(instance.edges, vec![(1, 2), (2, 3)]);
}

#[test]
fn test_parse_skips_comments_and_blank_lines() {
    let input = "c generated instance\nc second comment\n\np ds 4 2\nc between edges\n\t1 2\n\n\t3 4\n";
    let instance = parse_pace(input.as_bytes()).unwrap();
    assert_eq!(instance.num_vertices, 4);
    assert_eq!(instance.edges, vec![(1, 2), (3, 4)]);
}

#[test]
fn test_parse_edge_without_tab() {
    // Whitespace shape is not significant, only the tokens are.
    let instance = parse_pace("p ds 2 1\n1 2\n".as_bytes()).unwrap();
    assert_eq!(instance.edges, vec![(1, 2)]);
}

#[test]
fn test_parse_empty_graph() {
    let instance = parse_pace("p ds 0 0\n".as_bytes()).unwrap();
    assert_eq!(instance.num_vertices, 0);
    assert!(instance.edges.is_empty());
}

#[test]
fn test_missing_problem_line() {
    assert_eq!(
        parse_pace("c only comments\n".as_bytes()),
        Err(SolverError::MissingProblemLine)
    );
}

#[test]
fn test_wrong_descriptor() {
    assert!(matches!(
        parse_pace("p tw 3 2\n".as_bytes()),
        Err(SolverError::MalformedProblemLine(_))
    ));
}

#[test]
fn test_bad_counts() {
    assert!(matches!(
        parse_pace("p ds three 2\n".as_bytes()),
        Err(SolverError::MalformedProblemLine(_))
    ));
    assert!(matches!(
        parse_pace("p ds 3\n".as_bytes()),
        Err(SolverError::MalformedProblemLine(_))
    ));
}

#[test]
fn test_endpoint_out_of_range() {
    assert_eq!(
        parse_pace("p ds 3 1\n\t1 4\n".as_bytes()),
        Err(SolverError::VertexOutOfRange {
            id: 4,
            num_vertices: 3
        })
    );
    assert_eq!(
        parse_pace("p ds 3 1\n\t0 2\n".as_bytes()),
        Err(SolverError::VertexOutOfRange {
            id: 0,
            num_vertices: 3
        })
    );
}

#[test]
fn test_self_loop_rejected() {
    assert_eq!(
        parse_pace("p ds 3 1\n\t2 2\n".as_bytes()),
        Err(SolverError::SelfLoop(2))
    );
}

#[test]
fn test_truncated_edge_list() {
    assert_eq!(
        parse_pace("p ds 3 2\n\t1 2\n".as_bytes()),
        Err(SolverError::TruncatedEdgeList {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn test_malformed_edge() {
    assert!(matches!(
        parse_pace("p ds 3 1\n\t1 x\n".as_bytes()),
        Err(SolverError::MalformedEdge { .. })
    ));
    assert!(matches!(
        parse_pace("p ds 3 1\n\t1 2 3\n".as_bytes()),
        Err(SolverError::MalformedEdge { .. })
    ));
}

#[test]
fn test_to_graph_is_zero_indexed() {
    let instance = parse_pace("p ds 3 2\n\t1 2\n\t2 3\n".as_bytes()).unwrap();
    let graph = instance.to_graph();
    assert_eq!(graph.num_vertices(), 3);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(0, 2));
}

#[test]
fn test_write_solution() {
    let mut out = Vec::new();
    write_solution(&mut out, &[7, 2, 19]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3\n7\n2\n19\n");
}

#[test]
fn test_write_empty_solution() {
    let mut out = Vec::new();
    write_solution(&mut out, &[]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0\n");
}

#[test]
fn test_instance_json_round_trip() {
    let instance = parse_pace("p ds 3 2\n\t1 2\n\t2 3\n".as_bytes()).unwrap();
    let json = to_json(&instance).unwrap();
    let back: PaceInstance = from_json(&json).unwrap();
    assert_eq!(instance, back);
}
