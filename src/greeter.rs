use std::io::{self, BufRead, Write};

const NUMBER: i32 = 5;

pub fn greet<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Hello, World!")?;

    writeln!(output, "{}", NUMBER)?;
    writeln!(output, "hey {} there", NUMBER)?;
    writeln!(output, "hey{}there", NUMBER)?;

    write!(output, "Please enter your name: ")?;
    output.flush()?;

    let name = read_name(&mut input)?;
    output.write_all(b"Hello ")?;
    output.write_all(&name)?;
    writeln!(output)?;
    output.flush()
}

// Raw bytes, so input that is not UTF-8 is echoed back untouched.
fn read_name<R: BufRead>(input: &mut R) -> io::Result<Vec<u8>> {
    let mut name = Vec::new();
    input.read_until(b'\n', &mut name)?;

    if name.last() == Some(&b'\n') {
        name.pop();
        if name.last() == Some(&b'\r') {
            name.pop();
        }
    }

    Ok(name)
}
