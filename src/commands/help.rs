/// Print the command reference.
pub fn execute() -> Result<(), String> {
    println!(
        "Commands:\n\
         \x20 list              show the current page of your transactions\n\
         \x20 list all          show the full, un-paginated history\n\
         \x20 page <n>          jump to page n (as labelled in the selector)\n\
         \x20 page next|prev    step through pages\n\
         \x20 detail <id>       show one transaction\n\
         \x20 connections       list the people you can pay\n\
         \x20 form              show the send-money form\n\
         \x20 select <id>       choose the receiver\n\
         \x20 amount <value>    set the amount (negative input clamps to 0)\n\
         \x20 currency <code>   USD or EUR\n\
         \x20 sender <id>       set your own user id\n\
         \x20 describe <text>   set the payment description\n\
         \x20 send              submit the payment\n\
         \x20 add-connection    (not available yet)\n\
         \x20 refresh           reload transactions and connections\n\
         \x20 help              this text\n\
         \x20 quit              exit"
    );
    Ok(())
}
