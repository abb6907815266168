pub const TEXTPIPE_USAGE: &str = "\
textpipe usage:
textpipe --file={FILENAME}

--help                      print this help
--file={FILENAME}           process the file

--in, -                     process stdin
--out                       print to stdout
--compress                  gzip the output
--decompress                unzip the output

--verbose                   log pipeline details to stderr
--monitor                   log cpu and memory usage to stderr
";

pub const TEXTCAT_USAGE: &str = "\
textcat usage:
textcat --file={FILENAME}

--help                      print this help
--file={FILENAME}           process the file

--in, -                     process stdin
";

pub fn print_help(usage: &str) {
    print!("{}", usage);
    println!();
}

/// Error line on stderr, then a blank line and the usage text on stdout.
pub fn print_usage_error(message: &str, usage: &str) {
    eprintln!("{}", message);
    println!();
    print_help(usage);
}
