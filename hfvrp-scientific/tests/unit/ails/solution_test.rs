use super::*;
use crate::helpers::*;

#[test]
fn can_read_solution_built_from_builder() {
    let solution = AilsSolutionBuilder::default()
        .add_route((0, 400, vec![1, 2]))
        .add_route((0, 283, vec![3]))
        .add_cost("123.456")
        .build()
        .as_str()
        .read_ails_solution(&create_default_config())
        .unwrap();

    assert_eq!(solution.routes.len(), 2);
    assert_eq!(solution.routes[0].reported_capacity(), 400);
    assert_eq!(solution.routes[0].visits, vec![1, 2]);
    assert_eq!(solution.routes[1].reported_capacity(), 283);
    assert_eq!(solution.routes[1].visits, vec![3]);
    assert_eq!(solution.cost, 123.46);
}

#[test]
fn can_read_solution_from_test_file() {
    let solution = BufReader::new(get_test_resource("../../data/ails/Solutions/run-1/X-n8-k3-HD.sol").unwrap())
        .read_ails_solution(&create_default_config())
        .unwrap();

    let capacities = solution.routes.iter().map(|route| route.reported_capacity()).collect::<Vec<_>>();
    assert_eq!(capacities, vec![60, 40, 100, 60]);
    assert_eq!(solution.routes[2].visits, vec![7, 4, 6]);
    assert_eq!(solution.cost, 512.35);
}

#[test]
fn can_read_full_vehicle_descriptor() {
    let solution = "Veiculo [type=2, q=283, f=575, r=1.16] Route: 4\nCost 1"
        .read_ails_solution(&create_default_config())
        .unwrap();

    assert_eq!(
        solution.routes[0].descriptor,
        VehicleDescriptor { reported_type: 2, capacity: 283, fixed_cost: 575, variable_cost: 1.16 }
    );
}

parameterized_test! {can_read_route_visits, (line, expected), {
    let solution = format!("{line}\nCost 10.0").as_str().read_ails_solution(&create_default_config()).unwrap();

    assert_eq!(solution.routes.len(), 1);
    assert_eq!(solution.routes[0].visits, expected);
}}

can_read_route_visits! {
    case01_usual: ("Veiculo [type=0, q=283, f=575, r=1.16] Route: 5 1 3", vec![5, 1, 3]),
    case02_empty: ("Veiculo [type=0, q=283, f=575, r=1.16] Route:", Vec::<usize>::new()),
    case03_empty_with_space: ("Veiculo [type=0, q=283, f=575, r=1.16] Route:   ", Vec::<usize>::new()),
    case04_extra_spaces: ("Veiculo  [type=0,q=283,  f=575,r=1.16]   Route :  7   8 ", vec![7, 8]),
    case05_indented: ("   Veiculo [type=0, q=283, f=575, r=1.16] Route: 9", vec![9]),
}

#[test]
fn can_ignore_lines_which_are_not_routes() {
    let solution = "Instance: X-n3\nType 0: q=283 Route: 1 2\nVeiculo [type=0, q=283, f=575, r=1.16] Route: 3\nCost 5\nTime 1"
        .read_ails_solution(&create_default_config())
        .unwrap();

    assert_eq!(solution.routes.len(), 1);
    assert_eq!(solution.routes[0].visits, vec![3]);
}

parameterized_test! {can_detect_malformed_route, line, {
    let result = format!("{line}\nCost 10.0").as_str().read_ails_solution(&create_default_config());

    assert_eq!(result.expect_err("should fail").kind, ErrorKind::MalformedRouteDescriptor);
}}

can_detect_malformed_route! {
    case01_no_route_keyword: "Veiculo [type=0, q=283, f=575, r=1.16] 1 2 3",
    case02_no_brackets: "Veiculo type=0, q=283, f=575, r=1.16 Route: 1",
    case03_missing_field: "Veiculo [type=0, q=283, f=575] Route: 1",
    case04_wrong_order: "Veiculo [q=283, type=0, f=575, r=1.16] Route: 1",
    case05_float_capacity: "Veiculo [type=0, q=283.5, f=575, r=1.16] Route: 1",
    case06_bad_node: "Veiculo [type=0, q=283, f=575, r=1.16] Route: 1 x 3",
    case07_no_separator: "Veiculo [type=0, q=283, f=575, r=1.16] Route 1 2",
    case08_extra_field: "Veiculo [type=0, q=283, f=575, r=1.16, d=3] Route: 1",
    case09_negative_node: "Veiculo [type=0, q=283, f=575, r=1.16] Route: -1",
}

parameterized_test! {can_read_cost, (cost_line, expected), {
    let solution = format!("Veiculo [type=0, q=1, f=1, r=1] Route: 1\n{cost_line}")
        .as_str()
        .read_ails_solution(&create_default_config())
        .unwrap();

    assert_eq!(solution.cost, expected);
}}

can_read_cost! {
    case01_rounds_up: ("Cost 123.456", 123.46),
    case02_rounds_down: ("Cost 123.454", 123.45),
    case03_integer: ("Cost 100", 100.),
    case04_spaces: ("  Cost    42.1  ", 42.1),
    case05_binary_value_below_half: ("Cost 123.455", 123.45),
    case06_binary_value_below_half: ("Cost 2.675", 2.67),
}

parameterized_test! {can_detect_cost_errors, (content, expected_kind), {
    let result = content.read_ails_solution(&create_default_config());

    assert_eq!(result.expect_err("should fail").kind, expected_kind);
}}

can_detect_cost_errors! {
    case01_no_cost: ("Veiculo [type=0, q=1, f=1, r=1] Route: 1\nTime 10", ErrorKind::MissingCost),
    case02_bad_cost: ("Veiculo [type=0, q=1, f=1, r=1] Route: 1\nCost abc", ErrorKind::MissingCost),
    case03_infinite_cost: ("Cost inf", ErrorKind::MissingCost),
    case04_two_costs: ("Cost 10\nCost 20", ErrorKind::AmbiguousCost),
    case05_empty: ("", ErrorKind::MissingCost),
}

#[test]
fn can_use_custom_tokens() {
    let config = ConvertConfig {
        route_token: "Vehicle".to_string(),
        route_keyword: "Tour".to_string(),
        cost_label: "Objective".to_string(),
        cost_precision: 1,
        ..ConvertConfig::default()
    };

    let solution = "Vehicle [type=0, q=50, f=1, r=1] Tour: 4 2\nObjective 10.26".read_ails_solution(&config).unwrap();

    assert_eq!(solution.routes[0].visits, vec![4, 2]);
    assert_eq!(solution.cost, 10.3);
}
