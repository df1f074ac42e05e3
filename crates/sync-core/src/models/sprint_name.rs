/// Both list-name spellings template authors use for a sprint, probed in
/// this order on the template and live boards.
pub fn sprint_list_names(sprint_number: i64) -> [String; 2] {
    [
        format!("Sprint{sprint_number}"),
        format!("Sprint {sprint_number}"),
    ]
}
