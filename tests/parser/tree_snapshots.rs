use elm_cst::parse;

fn tree(input: &str) -> String {
    let result = parse(input);
    if result.has_errors() {
        let mut output = String::from("Parse Errors:\n");
        for diagnostic in &result.diagnostics {
            output.push_str(&format!(
                "  - {} {}\n",
                diagnostic.code().unwrap_or("E000"),
                diagnostic.message().unwrap_or_default()
            ));
        }
        return output.trim_end().to_string();
    }
    result.file.to_string()
}

#[test]
fn snapshot_counter_module() {
    let input = r#"
module Counter exposing (Model, Msg(..), init, update)

import Browser
import Html exposing (Html, button, div, text)

type alias Model =
    { count : Int }

type Msg
    = Increment
    | Decrement
    | Set Int

init : Model
init =
    { count = 0 }

update : Msg -> Model -> Model
update msg model =
    case msg of
        Increment ->
            { model | count = model.count + 1 }

        Decrement ->
            { model | count = model.count - 1 }

        Set n ->
            { model | count = n }
"#;
    insta::assert_snapshot!(tree(input), @r"
    module Counter exposing (Model, Msg(..), init, update)
    import Browser
    import Html exposing (Html, button, div, text)
    type alias Model = { count : Int }
    type Msg = Increment | Decrement | Set Int
    init : Model
    init = { count = 0 }
    update : (Msg -> (Model -> Model))
    update msg model = (case msg of { Increment -> { model | count = (model.count + 1) }; Decrement -> { model | count = (model.count - 1) }; (Set n) -> { model | count = n } })
    ");
}

#[test]
fn snapshot_list_functions() {
    let input = r#"
length : List a -> Int
length list =
    case list of
        [] ->
            0

        _ :: rest ->
            1 + length rest

evens =
    List.filter (\n -> n / 2 * 2 - n < 1) [ 1, 2, 3 ]
"#;
    insta::assert_snapshot!(tree(input), @r"
    length : ((List a) -> Int)
    length list = (case list of { [] -> 0; (_ :: rest) -> (1 + (length rest)) })
    evens = (List.filter (\n -> (n / 2 * 2 - n < 1)) [1, 2, 3])
    ");
}

#[test]
fn snapshot_let_and_if() {
    let input = r#"
clamp low high value =
    let
        bounded =
            if value < low then
                low

            else if value > high then
                high

            else
                value
    in
    ( bounded, -bounded )
"#;
    insta::assert_snapshot!(tree(input), @r"
    clamp low high value = (let { bounded = (if (value < low) then low else (if (value > high) then high else value)) } in (bounded, (-bounded)))
    ");
}

#[test]
fn snapshot_ports_and_records() {
    let input = r#"
port module Ports exposing (..)

port save : { key : String, value : String } -> Cmd msg

type alias Named a =
    { a | name : String }

rename : String -> Named a -> Named a
rename name record =
    { record | name = name }
"#;
    insta::assert_snapshot!(tree(input), @r"
    port module Ports exposing (..)
    port save : ({ key : String, value : String } -> (Cmd msg))
    type alias Named a = { a | name : String }
    rename : (String -> ((Named a) -> (Named a)))
    rename name record = { record | name = name }
    ");
}

#[test]
fn snapshot_errors() {
    let input = "a = (1\n\nb = ]\n\nc x Just = 1\n\nd = 1 < 2 > 3\n";
    insta::assert_snapshot!(tree(input), @r"
    Parse Errors:
      - E101 Expected `)`, got `b`.
      - E103 Expected an expression, got `]`.
      - E108 `Just` cannot be used as a function argument without parentheses.
      - E106 The comparison operators `<` and `>` cannot be chained.
    ");
}

#[test]
fn json_tree_is_tagged_by_kind() {
    let result = parse("main = f 1\n");
    let json = serde_json::to_value(&result.file).unwrap_or_default();

    assert_eq!(json.pointer("/declarations/0/kind"), Some(&"Value".into()));
    assert_eq!(json.pointer("/declarations/0/left/kind"), Some(&"Function".into()));
    assert_eq!(json.pointer("/declarations/0/body/kind"), Some(&"Application".into()));
    assert_eq!(
        json.pointer("/declarations/0/body/arguments/0/literal/Int"),
        Some(&"1".into())
    );
    assert_eq!(json.pointer("/span/end"), Some(&11.into()));
}
