extern crate ebc_debugger;
#[macro_use]
extern crate proptest;

use ebc_debugger::command::{
    DebugStatus, DebuggerOptions, DebuggerPrivate, TokenLine, REGISTER_COMMAND,
};
use ebc_debugger::core::{ExceptionType, SystemContext};
use ebc_debugger::register::REGISTERS;
use proptest::prelude::*;

/// Runs one command line the way the dispatcher would: the first word
/// picks the command, the second is the argument, the rest stays on the
/// line for the command to read.
fn execute(input: &str, context: &mut SystemContext) -> String {
    let mut out: Vec<u8> = Vec::new();
    {
        let mut debugger = DebuggerPrivate::new(&mut out, DebuggerOptions::new());
        let mut line = TokenLine::new(input);
        let command = line.next_token().unwrap();
        assert!(REGISTER_COMMAND.matches(command));

        let arg = line.next_token();
        let status = (REGISTER_COMMAND.handler)(
            arg,
            &mut line,
            &mut debugger,
            ExceptionType::from(3),
            context,
        );
        assert_eq!(status, DebugStatus::Continue);
    }
    String::from_utf8(out).unwrap()
}

fn value_in_dump(dump: &str, name: &str) -> u64 {
    let label = format!(" {} - 0x", name);
    let start = dump.find(&label).unwrap() + label.len();
    u64::from_str_radix(&dump[start..start + 16], 16).unwrap()
}

#[test]
fn write_then_dump() {
    let mut context = SystemContext::default();
    assert_eq!(execute("r R3 1F", &mut context), "");

    let dump = execute("r", &mut context);
    assert!(dump.contains("R3 - 0x000000000000001f"));
    assert_eq!(context.r3, 31);
    assert_eq!(
        context,
        SystemContext {
            r3: 0x1f,
            ..SystemContext::default()
        }
    );
}

#[test]
fn dump_order() {
    let mut context = SystemContext::default();
    let dump = execute("R", &mut context);
    let labels: Vec<Vec<&str>> = dump
        .lines()
        .map(|line| {
            line.split(", ")
                .map(|pair| pair.trim().split(" - ").next().unwrap())
                .collect()
        })
        .collect();

    assert_eq!(
        labels,
        vec![
            vec!["R0", "R1"],
            vec!["R2", "R3"],
            vec!["R4", "R5"],
            vec!["R6", "R7"],
            vec!["Flags", "ControlFlags"],
            vec!["Ip"],
        ]
    );
    assert_eq!(context, SystemContext::default());
}

#[test]
fn missing_value_keeps_ip() {
    let mut context = SystemContext {
        ip: 0x1234,
        ..SystemContext::default()
    };
    assert_eq!(execute("r Ip", &mut context), "Invalid Register Value\n");
    assert_eq!(context.ip, 0x1234);
}

#[test]
fn unknown_register_is_echoed() {
    let mut context = SystemContext {
        r0: 1,
        flags: 2,
        ..SystemContext::default()
    };
    let before = context;
    assert_eq!(execute("r Foo 5", &mut context), "Invalid Register - Foo\n");
    assert_eq!(execute("r fOO 5", &mut context), "Invalid Register - fOO\n");
    assert_eq!(context, before);
}

#[test]
fn case_variants_hit_the_same_register() {
    for name in &["r0", "R0"] {
        let mut context = SystemContext::default();
        execute(&format!("r {} 0x2a", name), &mut context);
        assert_eq!(context.r0, 0x2a);
    }
}

fn any_case(name: &'static str) -> BoxedStrategy<String> {
    proptest::collection::vec(any::<bool>(), name.len())
        .prop_map(move |upper| {
            name.chars()
                .zip(upper)
                .map(|(c, up)| {
                    if up {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect()
        })
        .boxed()
}

fn register_name() -> BoxedStrategy<(usize, String)> {
    (0..REGISTERS.len())
        .prop_flat_map(|index| (Just(index), any_case(REGISTERS[index].1)))
        .boxed()
}

proptest! {
    #[test]
    fn every_register_round_trips((index, name) in register_name(), seed in any::<u64>(), value in any::<u64>()) {
        let register = REGISTERS[index].0;
        let mut context = SystemContext {
            r0: seed,
            r7: seed.rotate_left(7),
            ip: seed ^ 0x5555,
            ..SystemContext::default()
        };
        let before = context;

        prop_assert_eq!(execute(&format!("r {} {:x}", name, value), &mut context), "");
        let dump = execute("r", &mut context);

        for &(other, other_name) in REGISTERS.iter() {
            let expected = if other == register { value } else { before.get(other) };
            prop_assert_eq!(value_in_dump(&dump, other_name), expected);
        }
    }
}
