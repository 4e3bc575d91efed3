use crate::domain::InputOptions;

/// Build the `dmno resolve` argument list.
///
/// Order is fixed: service, phase, cache flags, output format, no-prompt.
pub fn build_invocation_arguments(inputs: &InputOptions) -> Vec<String> {
    let mut args = vec!["resolve".to_string(), "--service".to_string(), inputs.service().to_string()];

    if !inputs.phase.is_empty() {
        args.push("--phase".to_string());
        args.push(inputs.phase.clone());
    }

    if inputs.skip_cache {
        args.push("--skip-cache".to_string());
    }

    if inputs.clear_cache {
        args.push("--clear-cache".to_string());
    }

    // json-full carries isSensitive alongside each value
    args.push("--format".to_string());
    args.push("json-full".to_string());

    args.push("--no-prompt".to_string());
    args
}
