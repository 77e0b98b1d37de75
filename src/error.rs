error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidRegisterValue {
            description("no register value was given")
            display("Invalid Register Value")
        }

        InvalidRegister(name: String) {
            description("unknown register name")
            display("Invalid Register - {}", name)
        }

        InvalidNumber(text: String) {
            description("register value is not a hexadecimal number")
            display("Invalid Register Value - {}", text)
        }

        TruncatedContext(len: usize) {
            description("context image is too short")
            display("context image is {} bytes, expected {}", len, ::core::data::CONTEXT_SIZE)
        }
    }
}
