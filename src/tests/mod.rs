// Test modules for salesgen crate
//
// Test organization follows the pattern where each source file has a
// corresponding test file that focuses on business logic verification.
// HTTP-level behavior against a stub provider lives in tests/.
