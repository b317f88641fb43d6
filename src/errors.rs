error_chain! {
    errors {
        Binding(slot: String) {
            description("failed to bind parameter")
            display("Failed to bind parameter {}", slot)
        }
        Extraction(slot: String) {
            description("failed to extract column value")
            display("Failed to extract value at {}", slot)
        }
        UnknownSlot(slot: String) {
            description("no such parameter or column")
            display("No such parameter or column: {}", slot)
        }
    }


    foreign_links {
        Utf8(::std::string::FromUtf8Error);
    }
}
